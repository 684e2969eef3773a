//! Line diff for the `--diff` display

/// Render a line-based diff between two texts.
///
/// Unchanged lines are indented, removed lines get a `-` gutter and added
/// lines a `+` gutter. Plain LCS; configs are small enough that the
/// quadratic table does not matter.
pub fn diff_strings(before: &str, after: &str) -> String {
    let a: Vec<&str> = before.lines().collect();
    let b: Vec<&str> = after.lines().collect();
    let lcs = lcs_table(&a, &b);

    let mut out = Vec::new();
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        if a[i] == b[j] {
            out.push(format!("  {}", a[i]));
            i += 1;
            j += 1;
        } else if lcs[i + 1][j] >= lcs[i][j + 1] {
            out.push(format!("- {}", a[i]));
            i += 1;
        } else {
            out.push(format!("+ {}", b[j]));
            j += 1;
        }
    }
    while i < a.len() {
        out.push(format!("- {}", a[i]));
        i += 1;
    }
    while j < b.len() {
        out.push(format!("+ {}", b[j]));
        j += 1;
    }
    out.join("\n")
}

fn lcs_table(a: &[&str], b: &[&str]) -> Vec<Vec<usize>> {
    let mut table = vec![vec![0usize; b.len() + 1]; a.len() + 1];
    for i in (0..a.len()).rev() {
        for j in (0..b.len()).rev() {
            table[i][j] = if a[i] == b[j] {
                table[i + 1][j + 1] + 1
            } else {
                table[i + 1][j].max(table[i][j + 1])
            };
        }
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_texts_have_no_markers() {
        let text = "[nlp]\nlang = \"en\"\n";
        let diff = diff_strings(text, text);
        assert!(diff.lines().all(|l| l.starts_with("  ")));
    }

    #[test]
    fn test_added_line_marked() {
        let before = "a\nb";
        let after = "a\nx\nb";
        let diff = diff_strings(before, after);
        assert_eq!(diff, "  a\n+ x\n  b");
    }

    #[test]
    fn test_removed_line_marked() {
        let before = "a\nx\nb";
        let after = "a\nb";
        let diff = diff_strings(before, after);
        assert_eq!(diff, "  a\n- x\n  b");
    }

    #[test]
    fn test_changed_line_is_remove_plus_add() {
        let diff = diff_strings("key = 1", "key = 2");
        assert!(diff.contains("- key = 1"));
        assert!(diff.contains("+ key = 2"));
    }
}
