//! Relative import scanning
//!
//! A textual pass over component source, not a parser. Only static imports of
//! the form `import <clause> from '<relative path>'` are recognised; anything
//! else is ignored.

use regex::Regex;
use std::sync::LazyLock;

use super::entry::Addressing;

/// `import X from './Name'` or `'./Name.ext'`
static SIBLING_FILE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"import\s+[\w\s{},*$]+?\s+from\s+['"]\./([\w-]+)(?:\.(\w+))?['"]"#).unwrap()
});

/// `import X from '../name'`, optionally followed by a path inside it
static SIBLING_DIR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"import\s+[\w\s{},*$]+?\s+from\s+['"]\.\./([\w-]+)(?:/[\w./-]*)?['"]"#).unwrap()
});

/// Names of sibling components imported by `source`
///
/// Names are lowercased and returned once each, in order of first
/// appearance. In file mode an explicit extension must match the configured
/// one.
pub fn scan(source: &str, addressing: &Addressing) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();

    let mut push = |name: &str| {
        let name = name.to_lowercase();
        if !names.contains(&name) {
            names.push(name);
        }
    };

    match addressing {
        Addressing::File { extension } => {
            for caps in SIBLING_FILE_RE.captures_iter(source) {
                let ext_ok = caps
                    .get(2)
                    .is_none_or(|ext| ext.as_str().eq_ignore_ascii_case(extension));
                if ext_ok {
                    push(&caps[1]);
                }
            }
        }
        Addressing::Directory { .. } => {
            for caps in SIBLING_DIR_RE.captures_iter(source) {
                push(&caps[1]);
            }
        }
    }

    names
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file_mode() -> Addressing {
        Addressing::default()
    }

    fn dir_mode() -> Addressing {
        Addressing::Directory {
            entry_files: vec!["index.vue".to_string()],
        }
    }

    #[test]
    fn test_file_mode_imports() {
        let source = r#"
<script setup>
import Button from './Button.vue';
import { ptViewMerge } from './utils';
import Badge from "./Badge";
import Panel from 'primevue/panel';
</script>
"#;
        assert_eq!(scan(source, &file_mode()), vec!["button", "utils", "badge"]);
    }

    #[test]
    fn test_file_mode_rejects_other_extensions() {
        let source = "import helpers from './helpers.ts';\nimport Icon from './Icon.vue';";
        assert_eq!(scan(source, &file_mode()), vec!["icon"]);
    }

    #[test]
    fn test_multiline_named_imports() {
        let source = "import {\n    SecondaryButton,\n    type Props\n} from './SecondaryButton.vue';";
        assert_eq!(scan(source, &file_mode()), vec!["secondarybutton"]);
    }

    #[test]
    fn test_duplicates_are_collapsed() {
        let source = "import A from './Button.vue';\nimport B from './button.vue';";
        assert_eq!(scan(source, &file_mode()), vec!["button"]);
    }

    #[test]
    fn test_ignores_unsupported_forms() {
        let source = r#"
import './Side.vue';
const Lazy = () => import('./Lazy.vue');
import Deep from './nested/Deep.vue';
import Parent from '../Parent.vue';
"#;
        assert!(scan(source, &file_mode()).is_empty());
    }

    #[test]
    fn test_directory_mode_imports() {
        let source = r#"
import Button from '../button';
import { Icon } from '../icon/index.vue';
import { cn } from '../utils';
import Local from './Local.vue';
"#;
        assert_eq!(scan(source, &dir_mode()), vec!["button", "icon", "utils"]);
    }
}
