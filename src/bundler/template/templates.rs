//! Entry-point source templates.
//!
//! Rendered with HTML escaping disabled. `runtime_entry` and `path` values are
//! already JSON string literals.

/// Runtime import, one import per package, the registry and the default export.
pub const IMPORTS_TEMPLATE: &str = r#"import {{target}} from {{runtime_entry}};
{{#each packages}}
import {{variable}} from {{path}};
{{/each}}

const packages = {
{{#each packages}}
  {{variable}},
{{/each}}
};

export default {{target}}({ packages });

"#;

/// Hot-module-reload acceptance block appended to development client bundles.
pub const HOT_RELOAD_TEMPLATE: &str = r#"if (module["hot"]) {
  module["hot"].accept(
    [
      {{runtime_entry}},
{{#each packages}}
      {{path}},
{{/each}}
    ],
    () => {
      const client = require({{runtime_entry}}).default;
{{#each packages}}
      const {{variable}} = require({{path}}).default;
{{/each}}
      const packages = {
{{#each packages}}
        {{variable}},
{{/each}}
      };
      client({ packages, isHmr: true });
    }
  );
}
"#;
