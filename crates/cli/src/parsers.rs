use std::str::FromStr;

/// A `LINE=LABEL` checkpoint given on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckpointArg {
    pub line: usize,
    pub label: String,
}

impl FromStr for CheckpointArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (line_str, label) = s
            .split_once('=')
            .ok_or_else(|| format!("Expected LINE=LABEL, got: {s}"))?;

        let line_str = line_str.trim();
        let line: usize = line_str
            .parse()
            .map_err(|_| format!("Invalid line number: {line_str}"))?;
        if line == 0 {
            return Err("Line numbers start at 1".to_string());
        }

        let label = label.trim();
        if label.is_empty() {
            return Err(format!("Missing label for line {line}"));
        }

        Ok(Self {
            line,
            label: label.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_line_and_label() {
        let arg: CheckpointArg = "1727=Create Tab Start".parse().unwrap();
        assert_eq!(arg.line, 1727);
        assert_eq!(arg.label, "Create Tab Start");
    }

    #[test]
    fn label_may_contain_equals() {
        let arg: CheckpointArg = " 12 = a=b ".parse().unwrap();
        assert_eq!(arg.line, 12);
        assert_eq!(arg.label, "a=b");
    }

    #[test]
    fn rejects_bad_input() {
        assert!("12".parse::<CheckpointArg>().is_err());
        assert!("x=label".parse::<CheckpointArg>().is_err());
        assert!("0=label".parse::<CheckpointArg>().is_err());
        assert!("-3=label".parse::<CheckpointArg>().is_err());
        assert!("4=  ".parse::<CheckpointArg>().is_err());
    }
}
