//! The tutorial's instructional content, rendered server-side.

use crate::presentation::format::format_lines;

/// An embedded code sample.
pub struct CodeSample {
    pub title: &'static str,
    pub language: &'static str,
    pub source: &'static str,
}

/// One tutorial section: a heading, its prose, and an optional sample.
pub struct Section {
    pub heading: &'static str,
    pub body: &'static str,
    pub code: Option<CodeSample>,
}

pub const TITLE: &str = "Character Counter: A Complete Beginner's Guide";

/// Expected report for hello.txt as saved by a typical editor (the file
/// reads "Hello." but carries a trailing CRLF).
pub const EXPECTED_HELLO_REPORT: &str =
    "(10)\t1\n(13)\t1\n.(46)\t1\nH(72)\t1\ne(101)\t1\nl(108)\t2\no(111)\t1";

pub const SECTIONS: &[Section] = &[
    Section {
        heading: "The Character Counting Challenge",
        body: "We'll build a program that reads a text file and counts the \
               frequency of each character. Each unique character gets its \
               own record carrying the character, its numeric code, and how \
               many times it appeared. Results are listed in ascending code \
               order.",
        code: None,
    },
    Section {
        heading: "What is ASCII?",
        body: "Computers don't understand letters directly, only numbers. \
               ASCII assigns a number to every character: 'A' is 65, 'a' is \
               97, '!' is 33, a space is 32. Even invisible characters like \
               the newline (10) and carriage return (13) have codes, which \
               is why they show up in the report for a file that looks like \
               plain \"Hello.\".",
        code: None,
    },
    Section {
        heading: "Think of a Row of Mailboxes",
        body: "Imagine a street of numbered mailboxes, one per possible \
               character. A character's code is its mailbox number: reading \
               an 'H' (code 72) means delivering a letter straight to box \
               72. No searching, no detours — knowing the number takes you \
               directly to the box, which is why counting stays fast no \
               matter how large the input gets.",
        code: None,
    },
    Section {
        heading: "The Frequency Record",
        body: "Each mailbox is a small record tracking one character and \
               its running count. Delivering another letter just increments \
               the count.",
        code: Some(CodeSample {
            title: "record.rs",
            language: "rust",
            source: "pub struct FrequencyRecord {\n\
                     \x20   /// The character being counted.\n\
                     \x20   pub character: char,\n\
                     \x20   /// Numeric value of the character.\n\
                     \x20   pub code: u32,\n\
                     \x20   /// How many times it appears.\n\
                     \x20   pub count: u64,\n\
                     }",
        }),
    },
    Section {
        heading: "Sorting the Mail",
        body: "Process the text one character at a time: look up the \
               character's box, create it on first delivery, increment it \
               afterwards. One pass over the input is all it takes.",
        code: Some(CodeSample {
            title: "tally.rs",
            language: "rust",
            source: "let mut counts: BTreeMap<char, u64> = BTreeMap::new();\n\
                     for ch in text.chars().take(max_chars) {\n\
                     \x20   *counts.entry(ch).or_insert(0) += 1;\n\
                     }",
        }),
    },
    Section {
        heading: "The Delivery Report",
        body: "Walk the mailboxes in code order and print one line per \
               occupied box. Control characters are \"staff only\" boxes \
               and get no public label, just their number.",
        code: Some(CodeSample {
            title: "hello.txt report",
            language: "text",
            source: EXPECTED_HELLO_REPORT,
        }),
    },
];

/// Render the tutorial as a single HTML page.
#[must_use]
pub fn render_page() -> String {
    let mut html = String::with_capacity(8 * 1024);
    html.push_str("<!doctype html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>{}</title>\n", escape(TITLE)));
    html.push_str("</head>\n<body>\n<main>\n");
    html.push_str(&format!("<h1>{}</h1>\n", escape(TITLE)));

    for section in SECTIONS {
        html.push_str("<section>\n");
        html.push_str(&format!("<h2>{}</h2>\n", escape(section.heading)));
        html.push_str(&format!("<p>{}</p>\n", escape(section.body)));
        if let Some(code) = &section.code {
            html.push_str(&format!(
                "<figure><figcaption>{}</figcaption><pre><code class=\"language-{}\">{}</code></pre></figure>\n",
                escape(code.title),
                escape(code.language),
                escape(code.source)
            ));
        }
        html.push_str("</section>\n");
    }

    let sample = charfreq_core::frequencies("Hello.\r\n");
    html.push_str("<section>\n<h2>Character Frequency Analysis Output</h2>\n");
    html.push_str(&format!(
        "<pre><code>{}</code></pre>\n</section>\n",
        escape(&format_lines(&sample))
    ));

    html.push_str(
        "<footer>\n<p>Live data: <a href=\"/api/file-content\">/api/file-content</a> · \
         <a href=\"/api/process-file\">/api/process-file</a> · \
         <a href=\"/api/animations/getFrequency\">/api/animations/{method}</a></p>\n</footer>\n",
    );
    html.push_str("</main>\n</body>\n</html>\n");
    html
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
