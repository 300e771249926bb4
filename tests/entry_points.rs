//! End-to-end entry-point generation against real node_modules layouts.

mod common;

use common::Project;
use kodegen_bundler_entrypoints::bundler::{
    BuildMode, Bundle, Bundler, Error, SettingsBuilder, Site,
};

fn bundler(project: &Project, sites: Vec<Site>, mode: BuildMode) -> Bundler {
    let settings = SettingsBuilder::new()
        .sites(sites)
        .out_dir(project.out_dir())
        .project_root(project.root())
        .build_mode(mode)
        .build()
        .unwrap();
    Bundler::new(settings).unwrap()
}

async fn generate(project: &Project, sites: Vec<Site>, mode: BuildMode) -> Vec<Bundle> {
    let bundler = bundler(project, sites, mode);
    bundler.prepare_out_dir().await.unwrap();
    bundler.generate_entry_points().await.unwrap()
}

#[tokio::test]
async fn type_specific_entry_points() {
    let project = Project::new();
    project
        .source("pkg-a", "src/client/index.tsx")
        .source("pkg-a", "src/server.ts");

    let bundles = generate(
        &project,
        vec![Site::new("s1", "default", ["pkg-a"])],
        BuildMode::Production,
    )
    .await;

    assert_eq!(
        bundles,
        vec![
            Bundle {
                name: "s1".into(),
                path: project.entry_point("s1/client.ts"),
            },
            Bundle {
                name: "server".into(),
                path: project.entry_point("server.ts"),
            },
        ]
    );

    let client = project.read_entry_point("s1/client.ts");
    assert!(client.contains("import client from \"@frontity/core/src/client\";"));
    assert!(client.contains("import pkg_da__default from \"pkg-a/src/client/index\";"));
    assert!(client.contains("export default client({ packages });"));

    let server = project.read_entry_point("server.ts");
    assert!(server.contains("import server from \"@frontity/core/src/server\";"));
    assert!(server.contains("import pkg_da__default from \"pkg-a/src/server\";"));
}

#[tokio::test]
async fn shared_index_serves_both_bundles() {
    let project = Project::new();
    project.source("pkg-b", "src/index.js");

    generate(
        &project,
        vec![Site::new("main", "default", ["pkg-b"])],
        BuildMode::Production,
    )
    .await;

    assert!(project
        .read_entry_point("main/client.ts")
        .contains("from \"pkg-b/src/index\";"));
    assert!(project
        .read_entry_point("server.ts")
        .contains("from \"pkg-b/src/index\";"));
}

#[tokio::test]
async fn package_without_sources_is_omitted() {
    let project = Project::new();
    project.install("pkg-c").source("pkg-b", "src/index.js");

    let bundles = generate(
        &project,
        vec![
            Site::new("only-c", "default", ["pkg-c"]),
            Site::new("mixed", "default", ["pkg-c", "pkg-b"]),
        ],
        BuildMode::Production,
    )
    .await;

    let names: Vec<_> = bundles.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, vec!["mixed", "server"]);
    assert!(!project.entry_point("only-c").exists());
    assert!(!project.read_entry_point("mixed/client.ts").contains("pkg-c"));
    assert!(!project.read_entry_point("server.ts").contains("pkg-c"));
}

#[tokio::test]
async fn development_client_accepts_hot_updates() {
    let project = Project::new();
    project
        .source("theme", "src/amp/client.js")
        .source("source", "src/index.ts");

    generate(
        &project,
        vec![Site::new("amp", "amp", ["theme", "source"])],
        BuildMode::Development,
    )
    .await;

    let client = project.read_entry_point("amp/client.ts");
    let hot = client.find("if (module[\"hot\"]) {").unwrap();
    let block = &client[hot..];
    assert!(block.contains("\"@frontity/core/src/client\","));
    assert!(block.contains("\"theme/src/amp/client\","));
    assert!(block.contains("\"source/src/index\","));
    assert!(block.contains("const theme__amp = require(\"theme/src/amp/client\").default;"));
    assert!(block.contains("const source__amp = require(\"source/src/index\").default;"));
    assert!(block.contains("client({ packages, isHmr: true });"));

    assert!(!project.read_entry_point("server.ts").contains("module[\"hot\"]"));
}

#[tokio::test]
async fn uninstalled_package_fails_before_writing() {
    let project = Project::new();
    project.source("pkg-a", "src/index.js");

    let bundler = bundler(
        &project,
        vec![
            Site::new("main", "default", ["pkg-a"]),
            Site::new("other", "default", ["not-installed"]),
        ],
        BuildMode::Production,
    );
    bundler.prepare_out_dir().await.unwrap();

    let err = bundler.generate_entry_points().await.unwrap_err();
    match &err {
        Error::MissingPackage { name } => assert_eq!(name, "not-installed"),
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(err.to_string().contains("npm install not-installed"));
    assert!(!project.entry_point("server.ts").exists());
    assert!(!project.entry_point("main").exists());
}

#[tokio::test]
async fn shared_packages_imported_once_per_mode() {
    let project = Project::new();
    project
        .source("theme", "src/index.js")
        .source("theme", "src/amp/index.js");

    generate(
        &project,
        vec![
            Site::new("a", "default", ["theme"]),
            Site::new("b", "default", ["theme"]),
            Site::new("c", "amp", ["theme"]),
        ],
        BuildMode::Production,
    )
    .await;

    let server = project.read_entry_point("server.ts");
    assert_eq!(server.matches("import theme__default from \"theme/src/index\";").count(), 1);
    assert_eq!(server.matches("import theme__amp from \"theme/src/amp/index\";").count(), 1);
}

#[tokio::test]
async fn reruns_are_byte_identical() {
    let project = Project::new();
    project
        .source("@scope/theme", "src/client/index.tsx")
        .source("@scope/theme", "src/server/index.tsx")
        .source("pkg-b", "src/index.js")
        .source("pkg-b", "src/amp.js");

    let sites = || {
        vec![
            Site::new("main", "default", ["@scope/theme", "pkg-b"]),
            Site::new("amp", "amp", ["pkg-b", "@scope/theme"]),
        ]
    };

    generate(&project, sites(), BuildMode::Development).await;
    let first = (
        project.read_entry_point("server.ts"),
        project.read_entry_point("main/client.ts"),
        project.read_entry_point("amp/client.ts"),
    );

    generate(&project, sites(), BuildMode::Development).await;
    let second = (
        project.read_entry_point("server.ts"),
        project.read_entry_point("main/client.ts"),
        project.read_entry_point("amp/client.ts"),
    );

    assert_eq!(first, second);
}

#[tokio::test]
async fn prepare_removes_stale_site_bundles() {
    let project = Project::new();
    project.source("pkg-a", "src/index.js");

    generate(
        &project,
        vec![Site::new("old", "default", ["pkg-a"])],
        BuildMode::Production,
    )
    .await;
    assert!(project.entry_point("old/client.ts").exists());

    generate(
        &project,
        vec![Site::new("new", "default", ["pkg-a"])],
        BuildMode::Production,
    )
    .await;
    assert!(!project.entry_point("old").exists());
    assert!(project.entry_point("new/client.ts").exists());
}

const DEVELOPMENT_CLIENT: &str = r#"import client from "@frontity/core/src/client";
import pkg_da__default from "pkg-a/src/client/index";
import pkg_db__default from "pkg-b/src/index";

const packages = {
  pkg_da__default,
  pkg_db__default,
};

export default client({ packages });

if (module["hot"]) {
  module["hot"].accept(
    [
      "@frontity/core/src/client",
      "pkg-a/src/client/index",
      "pkg-b/src/index",
    ],
    () => {
      const client = require("@frontity/core/src/client").default;
      const pkg_da__default = require("pkg-a/src/client/index").default;
      const pkg_db__default = require("pkg-b/src/index").default;
      const packages = {
        pkg_da__default,
        pkg_db__default,
      };
      client({ packages, isHmr: true });
    }
  );
}
"#;

const SERVER: &str = r#"import server from "@frontity/core/src/server";
import pkg_db__default from "pkg-b/src/index";

const packages = {
  pkg_db__default,
};

export default server({ packages });

"#;

#[tokio::test]
async fn generated_sources_match_exactly() {
    let project = Project::new();
    project
        .source("pkg-a", "src/client/index.tsx")
        .source("pkg-b", "src/index.js");

    generate(
        &project,
        vec![Site::new("main", "default", ["pkg-a", "pkg-b"])],
        BuildMode::Development,
    )
    .await;

    assert_eq!(project.read_entry_point("main/client.ts"), DEVELOPMENT_CLIENT);
    assert_eq!(project.read_entry_point("server.ts"), SERVER);
}
