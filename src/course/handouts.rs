//! Handout definitions
//!
//! The chapter's instructional files, embedded verbatim so the installed
//! binary is self-contained.

/// A printable chapter handout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Handout {
    /// Stable identifier used on the command line
    pub id: &'static str,
    /// Human-readable title
    pub title: &'static str,
    /// One-line summary for listings
    pub summary: &'static str,
    /// Verbatim handout text
    pub body: &'static str,
}

/// Get all chapter handouts
pub fn all_handouts() -> Vec<Handout> {
    vec![
        Handout {
            id: "storyboard",
            title: "Code vs Programming Storyboard",
            summary: "Decide which lines are planning and which are instructions",
            body: include_str!("../../content/chapter_1/code_vs_programming_comments.py"),
        },
        Handout {
            id: "repl",
            title: "Talk to the Python REPL",
            summary: "Expressions to try one at a time in an interactive session",
            body: include_str!("../../content/chapter_1/repl_playground.py"),
        },
    ]
}

/// Find a handout by id
pub fn find_handout(id: &str) -> Option<Handout> {
    all_handouts().into_iter().find(|h| h.id == id)
}
