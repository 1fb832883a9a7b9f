//! Tokenizer for the glint compiler front end.
//!
//! Converts UTF-8 source text into a flat sequence of [`Token`]s. Never
//! fails: any byte stream produces *some* sequence of tokens, deferring
//! all rejection to later phases.

mod cursor;
pub mod token;

pub use token::Token;

use cursor::Cursor;
use glint_common::{Interner, Keywords, Span};

const RESERVED_SYMBOL_STOP_BYTES: [u8; 6] = [b' ', b'\n', b'(', b')', b'.', b':'];

fn is_symbol_stop_byte(byte: u8) -> bool {
    byte == b',' || RESERVED_SYMBOL_STOP_BYTES.contains(&byte)
}

fn is_number_run_byte(byte: u8) -> bool {
    byte.is_ascii_digit() || byte == b'.' || byte == b'-'
}

/// Tokenizes `source`, interning identifiers and literal text through
/// `interner` and classifying keywords against `keywords`.
#[tracing::instrument(skip(source, interner, keywords))]
pub fn tokenize(source: &str, interner: &mut Interner, keywords: &Keywords) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut cursor = Cursor::new(source);

    while !cursor.is_at_end() {
        let byte = match cursor.peek() {
            Some(b) => b,
            None => break,
        };

        match byte {
            b' ' | b'\t' => {
                cursor.bump();
            }
            b'\n' => scan_newline_run(&mut cursor, &mut tokens),
            b'"' => scan_string(&mut cursor, interner, &mut tokens),
            b'0'..=b'9' | b'-' | b'.' => scan_number(&mut cursor, interner, &mut tokens),
            b':' | b',' | b'(' | b')' | b'{' | b'}' | b'+' | b'*' | b'/' | b'^' | b'%' | b'>'
            | b'<' => scan_single_char_punctuation(&mut cursor, byte, &mut tokens),
            b'=' => scan_equals(&mut cursor, &mut tokens),
            _ => scan_symbol(&mut cursor, interner, keywords, &mut tokens),
        }
    }

    tracing::debug!(count = tokens.len(), "tokenized source");
    tokens
}

fn scan_newline_run(cursor: &mut Cursor<'_>, tokens: &mut Vec<Token>) {
    let begin = cursor.position();
    while cursor.peek() == Some(b'\n') {
        cursor.bump();
    }
    let end = cursor.position();
    tokens.push(Token::NewLine {
        span: Span::new(begin, end),
    });
}

fn scan_string(cursor: &mut Cursor<'_>, interner: &mut Interner, tokens: &mut Vec<Token>) {
    let begin = cursor.position();
    let start_offset = cursor.offset();
    cursor.bump(); // opening quote
    while let Some(b) = cursor.peek() {
        if b == b'"' {
            break;
        }
        cursor.bump();
    }
    if cursor.peek() == Some(b'"') {
        cursor.bump(); // closing quote
    }
    let end_offset = cursor.offset();
    let end = cursor.position();
    let text = cursor.slice(start_offset, end_offset);
    let handle = interner.store(text);
    tokens.push(Token::String {
        handle,
        span: Span::new(begin, end),
    });
}

fn scan_number(cursor: &mut Cursor<'_>, interner: &mut Interner, tokens: &mut Vec<Token>) {
    let begin = cursor.position();
    let start_offset = cursor.offset();
    while let Some(b) = cursor.peek() {
        if is_number_run_byte(b) {
            cursor.bump();
        } else {
            break;
        }
    }
    let mut end_offset = cursor.offset();
    let mut run = cursor.slice(start_offset, end_offset);

    if run == "-" {
        tokens.push(Token::Minus {
            span: Span::new(begin, cursor.position()),
        });
        return;
    }
    if run == "." {
        tokens.push(Token::Dot {
            span: Span::new(begin, cursor.position()),
        });
        return;
    }

    if run.ends_with('.') && run[..run.len() - 1].bytes().any(|b| b.is_ascii_digit()) {
        cursor.unbump_one_non_newline_byte();
        end_offset -= 1;
        run = cursor.slice(start_offset, end_offset);
    }

    let end = cursor.position();
    let span = Span::new(begin, end);
    let handle = interner.store(run);
    if run.contains('.') {
        tokens.push(Token::Float { handle, span });
    } else {
        tokens.push(Token::Int { handle, span });
    }
}

fn scan_single_char_punctuation(cursor: &mut Cursor<'_>, byte: u8, tokens: &mut Vec<Token>) {
    let begin = cursor.position();
    cursor.bump();
    let span = Span::new(begin, cursor.position());
    tokens.push(match byte {
        b':' => Token::Colon { span },
        b',' => Token::Comma { span },
        b'(' => Token::LeftParen { span },
        b')' => Token::RightParen { span },
        b'{' => Token::LeftBrace { span },
        b'}' => Token::RightBrace { span },
        b'+' => Token::Plus { span },
        b'*' => Token::Times { span },
        b'/' => Token::Slash { span },
        b'^' => Token::Caret { span },
        b'%' => Token::Percent { span },
        b'>' => Token::Greater { span },
        b'<' => Token::Less { span },
        _ => unreachable!("byte restricted to the punctuation set by the caller"),
    });
}

fn scan_equals(cursor: &mut Cursor<'_>, tokens: &mut Vec<Token>) {
    let begin = cursor.position();
    cursor.bump();
    if cursor.peek() == Some(b'=') {
        cursor.bump();
        tokens.push(Token::EqualEqual {
            span: Span::new(begin, cursor.position()),
        });
    } else {
        tokens.push(Token::Equal {
            span: Span::new(begin, cursor.position()),
        });
    }
}

fn scan_symbol(
    cursor: &mut Cursor<'_>,
    interner: &mut Interner,
    keywords: &Keywords,
    tokens: &mut Vec<Token>,
) {
    let begin = cursor.position();
    let start_offset = cursor.offset();
    while let Some(b) = cursor.peek() {
        if is_symbol_stop_byte(b) {
            break;
        }
        cursor.bump();
    }
    let end_offset = cursor.offset();
    let end = cursor.position();
    let span = Span::new(begin, end);
    let text = cursor.slice(start_offset, end_offset);
    let handle = interner.store(text);

    tokens.push(if handle == keywords.r#fn {
        Token::Fn { span }
    } else if handle == keywords.r#if {
        Token::If { span }
    } else if handle == keywords.r#else {
        Token::Else { span }
    } else if handle == keywords.or {
        Token::Or { span }
    } else if handle == keywords.r#true {
        Token::Bool { value: true, span }
    } else if handle == keywords.r#false {
        Token::Bool { value: false, span }
    } else {
        Token::Symbol { handle, span }
    });
}
