use std::io::{self, Write};

pub const SEPARATOR_WIDTH: usize = 50;
pub const HEADER_RULE_WIDTH: usize = 30;

#[derive(Debug, Clone, Copy)]
pub struct Layout {
    pub add_separators: bool,
    pub include_filenames: bool,
}

impl Layout {
    /// Writes whatever precedes the content of the `index`-th file.
    pub fn write_preamble<W: Write>(&self, out: &mut W, index: usize, name: &str) -> io::Result<()> {
        if self.add_separators && index > 0 {
            write!(out, "\n\n{}\n\n", "=".repeat(SEPARATOR_WIDTH))?;
        }

        if self.include_filenames {
            writeln!(out, "File: {}", name)?;
            if self.add_separators {
                write!(out, "{}\n\n", "-".repeat(HEADER_RULE_WIDTH))?;
            }
        }

        Ok(())
    }
}
