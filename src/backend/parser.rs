/// Field separator, both between top-level columns and inside quoted lists.
pub const DELIMITER: char = ',';
pub const QUOTE: char = '"';

pub struct CsvParser;

impl CsvParser {
    /// Splits a raw line into its top-level fields.
    ///
    /// A comma separates fields only when an even number of quote characters
    /// precede it on the line, with no limit on how many quoted spans a line
    /// holds. Fields come back verbatim, quotes included, so `"A, B, C"` stays
    /// one field while `"A","B"` is two.
    /// Never fails; counting fields is left to the record layer.
    pub fn split_line(line: &str) -> Vec<String> {
        let mut fields = Vec::new();
        let mut in_quote = false;
        let mut start = 0;

        for (i, c) in line.char_indices() {
            match c {
                QUOTE => in_quote = !in_quote,
                DELIMITER if !in_quote => {
                    fields.push(line[start..i].to_string());
                    start = i + c.len_utf8();
                }
                _ => {}
            }
        }
        fields.push(line[start..].to_string());

        fields
    }

    /// Expands one field into its values.
    ///
    /// An empty field has no values. A field starting with a quote is a list:
    /// quotes are dropped, the rest is split on commas and each piece trimmed
    /// (empty pieces are kept). Anything else is a single value, left untrimmed.
    pub fn parse_column(raw: &str) -> Vec<String> {
        if raw.is_empty() {
            return Vec::new();
        }

        if raw.starts_with(QUOTE) {
            raw.replace(QUOTE, "")
                .split(DELIMITER)
                .map(|piece| piece.trim().to_string())
                .collect()
        } else {
            vec![raw.to_string()]
        }
    }
}
