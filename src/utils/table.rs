/// Column alignment within a rendered table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Align {
    Left,
    Right,
}

/// A plain-text table generator for terminal output.
pub struct Table {
    headers: Vec<String>,
    alignments: Vec<Align>,
    rows: Vec<Vec<String>>,
    col_widths: Vec<usize>,
}

impl Table {
    /// Create a new table with the given headers, all columns left-aligned.
    pub fn new(headers: Vec<&str>) -> Self {
        let alignments = vec![Align::Left; headers.len()];
        Self::with_alignments(headers, alignments)
    }

    /// Create a new table with per-column alignment. Missing alignments
    /// default to left, extra ones are dropped.
    pub fn with_alignments(headers: Vec<&str>, mut alignments: Vec<Align>) -> Self {
        alignments.resize(headers.len(), Align::Left);
        let col_widths = headers.iter().map(|h| h.len()).collect();
        let headers = headers.iter().map(|h| h.to_string()).collect();
        Table {
            headers,
            alignments,
            rows: Vec::new(),
            col_widths,
        }
    }

    /// Add a row, widening columns as needed. Cells beyond the header count
    /// are dropped, short rows are padded with empty cells.
    pub fn add_row(&mut self, mut row: Vec<String>) {
        row.truncate(self.headers.len());
        while row.len() < self.headers.len() {
            row.push(String::new());
        }

        for (i, col) in row.iter().enumerate() {
            self.col_widths[i] = self.col_widths[i].max(col.len());
        }

        self.rows.push(row);
    }

    /// Render the table as a formatted string, one line per row, trailing
    /// newline included.
    pub fn render(&self) -> String {
        let mut output = String::new();

        output.push_str(&self.render_row(&self.headers));
        output.push('\n');
        output.push_str(&self.render_separator());
        output.push('\n');

        for row in &self.rows {
            output.push_str(&self.render_row(row));
            output.push('\n');
        }

        output
    }

    fn render_row(&self, row: &[String]) -> String {
        let mut line = String::new();
        for (i, col) in row.iter().enumerate() {
            let width = self.col_widths[i];
            match self.alignments[i] {
                Align::Left => line.push_str(&format!("{:<width$}", col, width = width)),
                Align::Right => line.push_str(&format!("{:>width$}", col, width = width)),
            }
            if i < row.len() - 1 {
                line.push_str(" | ");
            }
        }
        line.trim_end().to_string()
    }

    fn render_separator(&self) -> String {
        let mut line = String::new();
        for (i, &width) in self.col_widths.iter().enumerate() {
            line.push_str(&"-".repeat(width));
            if i < self.col_widths.len() - 1 {
                line.push_str("-+-");
            }
        }
        line
    }
}
