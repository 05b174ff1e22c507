//! Paginated schedule document
//!
//! Lays out the title, the subject list and the exam list on fixed-height
//! pages. Entries follow insertion order, not weekday order. Vertical
//! positions are in page units; a page holds content down to
//! [`PAGE_CONTENT_LIMIT`] before a new page is started.

use crate::domain::Schedule;

/// File name of the exported document
pub const EXPORT_FILENAME: &str = "student_schedule.txt";

pub const DOCUMENT_TITLE: &str = "Student Schedule";

/// Offset past which the current page is closed
pub const PAGE_CONTENT_LIMIT: u32 = 270;

const TITLE_Y: u32 = 20;
const FIRST_SECTION_Y: u32 = 40;
/// Offset a fresh continuation page starts at
const PAGE_TOP_Y: u32 = 20;
const HEADER_FONT_SIZE: u8 = 16;
const BODY_FONT_SIZE: u8 = 12;
const HEADER_SPACING: u32 = 10;
const LINE_SPACING: u32 = 5;
const ENTRY_SPACING: u32 = 10;
const SECTION_GAP: u32 = 10;

/// A positioned line of text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub y: u32,
    pub font_size: u8,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    pub lines: Vec<Line>,
}

impl Page {
    pub fn texts(&self) -> Vec<&str> {
        self.lines.iter().map(|line| line.text.as_str()).collect()
    }
}

/// Multi-page document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub pages: Vec<Page>,
}

impl Document {
    /// Render as plain text, pages separated by a form feed line.
    ///
    /// A vertical gap wider than one line step becomes a blank line.
    pub fn render_text(&self) -> String {
        let mut output = String::new();

        for (index, page) in self.pages.iter().enumerate() {
            if index > 0 {
                output.push_str("\u{000C}\n");
            }

            let mut previous_y: Option<u32> = None;
            for line in &page.lines {
                if let Some(prev) = previous_y {
                    if line.y.saturating_sub(prev) > LINE_SPACING {
                        output.push('\n');
                    }
                }
                output.push_str(&line.text);
                output.push('\n');
                previous_y = Some(line.y);
            }
        }

        output
    }
}

/// Cursor that places lines and opens pages as content overflows
struct Layout {
    pages: Vec<Page>,
    y: u32,
}

impl Layout {
    fn new() -> Self {
        Layout {
            pages: vec![Page::default()],
            y: FIRST_SECTION_Y,
        }
    }

    fn text_at(&mut self, y: u32, font_size: u8, text: String) {
        // The page list is never empty
        if let Some(page) = self.pages.last_mut() {
            page.lines.push(Line { y, font_size, text });
        }
    }

    fn text(&mut self, font_size: u8, text: String, advance: u32) {
        self.text_at(self.y, font_size, text);
        self.y += advance;
    }

    fn header(&mut self, title: &str) {
        self.text(HEADER_FONT_SIZE, title.to_string(), HEADER_SPACING);
    }

    /// Four-line numbered entry, then a page break if the page is full
    fn entry(&mut self, number: usize, name: &str, details: [String; 3]) {
        self.text(BODY_FONT_SIZE, format!("{}. {}", number, name), LINE_SPACING);
        let [first, second, third] = details;
        self.text(BODY_FONT_SIZE, first, LINE_SPACING);
        self.text(BODY_FONT_SIZE, second, LINE_SPACING);
        self.text(BODY_FONT_SIZE, third, ENTRY_SPACING);

        if self.y > PAGE_CONTENT_LIMIT {
            self.pages.push(Page::default());
            self.y = PAGE_TOP_Y;
        }
    }
}

/// Lay out the whole schedule as a document
pub fn export_schedule(schedule: &Schedule) -> Document {
    let mut layout = Layout::new();
    layout.text_at(TITLE_Y, HEADER_FONT_SIZE, DOCUMENT_TITLE.to_string());

    layout.header("Subjects");
    for (index, subject) in schedule.subjects().iter().enumerate() {
        layout.entry(
            index + 1,
            &subject.name,
            [
                format!("   Teacher: {}", subject.teacher),
                format!("   Days: {}", subject.days.join_tokens()),
                format!("   Time: {}", subject.time),
            ],
        );
    }

    layout.y += SECTION_GAP;

    layout.header("Exams");
    for (index, exam) in schedule.exams().iter().enumerate() {
        layout.entry(
            index + 1,
            &exam.name,
            [
                format!("   Date: {}", exam.date),
                format!("   Time: {}", exam.time),
                format!("   Location: {}", exam.location),
            ],
        );
    }

    log::debug!(
        "Exported {} subjects and {} exams on {} page(s)",
        schedule.subjects().len(),
        schedule.exams().len(),
        layout.pages.len()
    );

    Document {
        pages: layout.pages,
    }
}
