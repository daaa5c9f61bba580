use crate::application::read_models::BuildReport;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// ShellFormatter adapter printing a line the caller can paste into a shell
///
/// A real run yields `export VAR=<cache> && cd <workdir>`. A dry run lists
/// the planned order as comments instead, since nothing was created.
pub struct ShellFormatter;

impl ShellFormatter {
    pub fn new() -> Self {
        Self
    }

    fn quote(value: &str) -> String {
        let is_plain = !value.is_empty()
            && value
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || "/._-+=:,@%".contains(c));
        if is_plain {
            value.to_string()
        } else {
            format!("'{}'", value.replace('\'', r"'\''"))
        }
    }
}

impl Default for ShellFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for ShellFormatter {
    fn format(&self, report: &BuildReport) -> Result<String> {
        if report.dry_run {
            let mut output = String::from("# dry run: build order\n");
            for (index, node) in report.build_order.iter().enumerate() {
                output.push_str(&format!("# {}. {}\n", index + 1, node.reference));
            }
            return Ok(output);
        }

        Ok(format!(
            "export {}={} && cd {}\n",
            report.cache_env_var,
            Self::quote(&report.cache_dir),
            Self::quote(&report.workdir)
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::outbound::formatters::test_support::sample_report;

    #[test]
    fn test_shell_output() {
        let output = ShellFormatter::new().format(&sample_report(false)).unwrap();
        assert_eq!(output, "export CONAN_USER_HOME=/tmp/cache && cd /tmp/work\n");
    }

    #[test]
    fn test_shell_output_quotes_paths_with_spaces() {
        let mut report = sample_report(false);
        report.workdir = "/tmp/my work".to_string();
        report.cache_dir = "/tmp/it's".to_string();

        let output = ShellFormatter::new().format(&report).unwrap();
        assert_eq!(
            output,
            "export CONAN_USER_HOME='/tmp/it'\\''s' && cd '/tmp/my work'\n"
        );
    }

    #[test]
    fn test_shell_output_dry_run_lists_order() {
        let output = ShellFormatter::new().format(&sample_report(true)).unwrap();
        assert_eq!(
            output,
            "# dry run: build order\n# 1. b/1.0@user/channel\n# 2. a/1.0@user/channel\n"
        );
        assert!(!output.contains("export"));
    }
}
