//! Extraction of a GraphViz digraph embedded in compiler output.
//!
//! When `TINT_DUMP_UNIFORMITY_GRAPH` is enabled, the compiler prints a
//! `digraph G { ... }` block among its regular diagnostics. [`extract`]
//! locates that block and returns exactly its text.

/// Extract the first `digraph G { ... }` block from `compiler_output`.
///
/// Lines are scanned in order. Extraction starts at the first line beginning
/// with `digraph G {` (flexible whitespace between the tokens) and every line
/// from there on is appended to the result. A brace-depth counter tracks `{`
/// and `}` occurrences on each accumulated line; the block ends on the line
/// where depth returns to zero. If the input ends before the block is
/// balanced, the partial block collected so far is returned.
///
/// Returns an empty string when no digraph start line is present.
///
/// Accumulated lines are concatenated without separators, and braces inside
/// dot labels or comments are counted like any others. Both match the
/// behavior of the upstream tooling this feeds.
///
/// # Examples
///
/// ```
/// use wgsl_fuzz_tools::digraph;
///
/// let output = "warning: foo\ndigraph G {\na -> b;\n}\ntrailing";
/// assert_eq!(digraph::extract(output), "digraph G {a -> b;}");
///
/// assert_eq!(digraph::extract("no graph here"), "");
/// ```
pub fn extract(compiler_output: &str) -> String {
    let mut depth: i32 = 0;
    let mut in_graph = false;
    let mut result = String::new();

    for line in compiler_output.lines() {
        if !in_graph && is_graph_start(line) {
            in_graph = true;
        }

        if !in_graph {
            continue;
        }

        result.push_str(line);

        for ch in line.chars() {
            match ch {
                '{' => depth += 1,
                '}' => depth -= 1,
                _ => {}
            }
        }

        if depth == 0 {
            break;
        }
    }

    result
}

/// Whether a line matches `digraph G {` at its start, allowing flexible
/// whitespace between the tokens.
fn is_graph_start(line: &str) -> bool {
    let Some(rest) = line.strip_prefix("digraph") else {
        return false;
    };
    let after_keyword = rest.trim_start();
    // At least one whitespace character must separate "digraph" and "G".
    if after_keyword.len() == rest.len() {
        return false;
    }
    match after_keyword.strip_prefix('G') {
        Some(rest) => rest.trim_start().starts_with('{'),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_balanced_block() {
        let output = "foo\ndigraph G {\na->b;\n}\nbar";
        assert_eq!(extract(output), "digraph G {a->b;}");
    }

    #[test]
    fn returns_empty_without_start_line() {
        assert_eq!(extract(""), "");
        assert_eq!(extract("error: expression is not a shader\n"), "");
        // A graph with a different name does not match.
        assert_eq!(extract("digraph H {\na->b;\n}"), "");
    }

    #[test]
    fn nested_braces_do_not_end_the_block() {
        let output = "digraph G {\nsubgraph {\na -> b\n}\n}\nafter";
        assert_eq!(extract(output), "digraph G {subgraph {a -> b}}");
    }

    #[test]
    fn single_line_block() {
        assert_eq!(extract("digraph G { a -> b }"), "digraph G { a -> b }");
    }

    #[test]
    fn unterminated_block_returns_partial_text() {
        let output = "digraph G {\na -> b;\nnever closed";
        assert_eq!(extract(output), "digraph G {a -> b;never closed");
    }

    #[test]
    fn flexible_whitespace_in_start_line() {
        assert_eq!(extract("digraph  G{\n}"), "digraph  G{}");
        assert_eq!(extract("digraph\tG \t{\n}"), "digraph\tG \t{}");
    }

    #[test]
    fn start_line_must_not_be_indented() {
        assert_eq!(extract("  digraph G {\n}"), "");
    }

    #[test]
    fn keyword_must_be_separated_from_graph_name() {
        assert_eq!(extract("digraphG {\n}"), "");
    }

    #[test]
    fn over_closed_line_keeps_collecting_to_end_of_input() {
        // Depth jumps straight from 1 to -1 and never lands on zero, so
        // the scan runs to end of input.
        let output = "digraph G {}}\nmore";
        assert_eq!(extract(output), "digraph G {}}more");
    }

    #[test]
    fn braces_before_the_graph_are_ignored() {
        let output = "fn main() {}\ndigraph G {\na -> b;\n}";
        assert_eq!(extract(output), "digraph G {a -> b;}");
    }

    #[test]
    fn trailing_output_after_block_is_dropped() {
        let output = "digraph G {\nx\n}\nerror: unrelated {\n}";
        assert_eq!(extract(output), "digraph G {x}");
    }
}
