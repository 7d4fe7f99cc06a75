// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_lesson_content(sections: usize) -> String {
    let mut content = String::from("##TITLE## Benchmark Lesson\n\n##INTRO##\nAn **intro** paragraph.\n\n");
    let section = "##SECTION## Topic\n##PARAGRAPH##\nParagraph with **bold** terms and prose.\n\n##POINTS##\n- **One**: first\n- **Two**: second\n\n##CODE##\n```javascript\n// Example\nconst value = compute(\"input\", 'x');\nconsole.log(value);\nfunction compute(a, b) {\n  return a + b;\n}\n```\n\n";
    content.push_str(&section.repeat(sections));
    content.push_str("##SUMMARY##\nDone.\n");
    content
}
