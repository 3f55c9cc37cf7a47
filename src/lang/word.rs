const BACKSPACE: char = '\u{8}';
const DELETE: char = '\u{7f}';

fn is_delimiter(c: char) -> bool {
    c == ' ' || c == '\t' || c == '\n' || c == '\r' || c == '\0'
}

/// Split a line of typed input into the words handed to `interpret`.
///
/// Backspace and delete erase the previous character of the word
/// being read, the way a raw terminal delivers corrections.
pub fn words(line: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut word = String::new();
    for ch in line.chars() {
        if is_delimiter(ch) {
            if !word.is_empty() {
                words.push(std::mem::take(&mut word));
            }
        } else if ch == BACKSPACE || ch == DELETE {
            word.pop();
        } else {
            word.push(ch);
        }
    }
    if !word.is_empty() {
        words.push(word);
    }
    words
}
