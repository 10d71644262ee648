//! DOT attribute list helpers.

use std::fmt::Write;

use archdot_model::Architecture;

/// Build a bracketed attribute list: `[k1="v1" k2="v2" <extra>]`.
///
/// Entries whose value is absent or empty are dropped. Values are quoted but
/// not escaped. The list is always bracketed, so with nothing to emit the
/// result is `[ ]`.
pub fn attr_list(attrs: &[(&str, Option<&str>)], extra: &str) -> String {
    let mut output = String::from("[");
    let mut first = true;
    for &(key, value) in attrs {
        let Some(value) = value.filter(|v| !v.is_empty()) else {
            continue;
        };
        if !first {
            output.push(' ');
        }
        let _ = write!(output, "{key}=\"{value}\"");
        first = false;
    }
    output.push(' ');
    output.push_str(extra);
    output.push(']');
    output
}

/// Lookup of per-environment `nodeAttrs`, keyed by environment id.
///
/// Resolved through [`Architecture::environment`], so when several
/// environments share an id the last one declared wins.
#[derive(Debug, Clone, Copy)]
pub struct EnvironmentStyles<'a> {
    arch: &'a Architecture,
}

impl<'a> EnvironmentStyles<'a> {
    pub fn new(arch: &'a Architecture) -> Self {
        Self { arch }
    }

    /// Extra styling for statements deployed in `env_id`, or `""` when the
    /// environment is unknown or has no `nodeAttrs`.
    pub fn shape(&self, env_id: &str) -> &'a str {
        self.arch
            .environment(env_id)
            .and_then(|env| env.node_attrs.as_deref())
            .unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use archdot_model::Environment;
    use pretty_assertions::assert_eq;

    fn env(id: &str, node_attrs: Option<&str>) -> Environment {
        Environment {
            id: id.to_string(),
            name: id.to_uppercase(),
            node_attrs: node_attrs.map(str::to_string),
            ..Default::default()
        }
    }

    fn with_environments(environments: Vec<Environment>) -> Architecture {
        Architecture {
            environments,
            ..Default::default()
        }
    }

    #[test]
    fn present_values_joined_by_single_space() {
        let list = attr_list(
            &[("label", Some("Api")), ("tooltip", Some("entry")), ("URL", Some("http://x"))],
            "",
        );
        assert_eq!(list, r#"[label="Api" tooltip="entry" URL="http://x" ]"#);
    }

    #[test]
    fn absent_and_empty_values_are_dropped() {
        let list = attr_list(&[("label", Some("Api")), ("tooltip", None), ("URL", Some(""))], "");
        assert_eq!(list, r#"[label="Api" ]"#);
    }

    #[test]
    fn nothing_to_emit_still_brackets() {
        assert_eq!(attr_list(&[("label", None), ("tooltip", None)], ""), "[ ]");
        assert_eq!(attr_list(&[], ""), "[ ]");
    }

    #[test]
    fn extra_token_goes_last() {
        assert_eq!(
            attr_list(&[("label", Some("Db"))], "shape=box"),
            r#"[label="Db" shape=box]"#
        );
        assert_eq!(attr_list(&[("label", None)], "shape=box"), "[ shape=box]");
    }

    #[test]
    fn quotes_are_not_escaped() {
        assert_eq!(
            attr_list(&[("label", Some(r#"say "hi""#))], ""),
            r#"[label="say "hi"" ]"#
        );
    }

    #[test]
    fn shape_lookup() {
        let envs = vec![
            env("prod", Some("shape=box")),
            env("dev", None),
            env("qa", Some("")),
        ];
        let arch = with_environments(envs);
        let styles = EnvironmentStyles::new(&arch);

        assert_eq!(styles.shape("prod"), "shape=box");
        assert_eq!(styles.shape("dev"), "");
        assert_eq!(styles.shape("qa"), "");
        assert_eq!(styles.shape("missing"), "");
    }

    #[test]
    fn last_duplicate_environment_wins() {
        let arch = with_environments(vec![
            env("prod", Some("shape=box")),
            env("prod", Some("shape=oval")),
        ]);
        let styles = EnvironmentStyles::new(&arch);
        assert_eq!(styles.shape("prod"), "shape=oval");
    }
}
