use std::io::{self, Write};

use linecalc::{
    driver::{
        DriverConfig, LineEnding,
        reader::{Line, LineReader},
        reply::ReplyWriter,
        answer_one, respond, serve,
    },
    error::DriverError,
};
use pretty_assertions::assert_eq;

fn transcript(input: &str, config: &DriverConfig) -> (usize, String) {
    let mut output = Vec::new();
    let answered = serve(input.as_bytes(), &mut output, config).unwrap();
    (answered, String::from_utf8(output).unwrap())
}

fn with_limit(max_line_length: usize) -> DriverConfig {
    DriverConfig { max_line_length,
                   ..DriverConfig::default() }
}

#[test]
fn answers_each_line_followed_by_a_blank_line() {
    let (answered, output) = transcript("1+1\n6*7\n", &DriverConfig::default());
    assert_eq!(answered, 2);
    assert_eq!(output, "2\n\n42\n\n");
}

#[test]
fn accepts_carriage_return_terminators() {
    let (answered, output) = transcript("4/2\r5-7\r", &DriverConfig::default());
    assert_eq!(answered, 2);
    assert_eq!(output, "2\n\n-2\n\n");

    let (answered, _) = transcript("1\r\n2\r\n", &DriverConfig::default());
    assert_eq!(answered, 2);
}

#[test]
fn crlf_replies() {
    let config = DriverConfig { line_ending: LineEnding::CrLf,
                                ..DriverConfig::default() };
    let (_, output) = transcript("1+1\r\n", &config);
    assert_eq!(output, "2\r\n\r\n");
}

#[test]
fn final_line_without_terminator_is_answered() {
    let (answered, output) = transcript("6*7", &DriverConfig::default());
    assert_eq!(answered, 1);
    assert_eq!(output, "42\n\n");
}

#[test]
fn empty_input_ends_the_session() {
    let (answered, output) = transcript("", &DriverConfig::default());
    assert_eq!(answered, 0);
    assert_eq!(output, "");
}

#[test]
fn empty_line_is_a_syntax_error() {
    let (_, output) = transcript("\n", &DriverConfig::default());
    assert_eq!(output, "Error: Invalid syntax.\n\n");
}

#[test]
fn malformed_lines_do_not_end_the_session() {
    let (answered, output) = transcript("(1\n5/0\n99999999999999999999\n2+2\n",
                                        &DriverConfig::default());
    assert_eq!(answered, 4);
    assert_eq!(output,
               "Error: Invalid syntax.\n\n\
                Error: Division by zero.\n\n\
                Error: Value too large. Literals may not exceed 9223372036854775807.\n\n\
                4\n\n");
}

#[test]
fn long_lines_are_truncated_and_reported() {
    let (answered, output) = transcript("1+1+1+1+1+1\n2+2\n", &with_limit(8));
    assert_eq!(answered, 2);
    assert_eq!(output,
               "Error: Input is longer than the maximum of 8 characters.\n\n4\n\n");
}

#[test]
fn line_of_exactly_the_maximum_length_is_accepted() {
    let (_, output) = transcript("12345678\n", &with_limit(8));
    assert_eq!(output, "12345678\n\n");
}

#[test]
fn buffer_overflow_outranks_every_other_error() {
    let line = Line { text:      "(1".to_string(),
                      truncated: true, };
    assert_eq!(respond(&line, &with_limit(2)),
               "Error: Input is longer than the maximum of 2 characters.");
}

#[test]
fn reader_reports_truncation() {
    let mut reader = LineReader::new("abcdef\nab\n".as_bytes(), 3).unwrap();

    assert_eq!(reader.read_line().unwrap(),
               Some(Line { text:      "abc".to_string(),
                           truncated: true, }));
    assert_eq!(reader.read_line().unwrap(), Some(Line::complete("ab")));
    assert_eq!(reader.read_line().unwrap(), None);
}

#[test]
fn reader_keeps_empty_lines_between_carriage_returns() {
    let mut reader = LineReader::new("\r\r\n1".as_bytes(), 8).unwrap();

    assert_eq!(reader.read_line().unwrap(), Some(Line::complete("")));
    assert_eq!(reader.read_line().unwrap(), Some(Line::complete("")));
    assert_eq!(reader.read_line().unwrap(), Some(Line::complete("1")));
    assert_eq!(reader.read_line().unwrap(), None);
}

#[test]
fn zero_line_length_is_rejected() {
    let mut output = Vec::new();
    let err = serve("1\n".as_bytes(), &mut output, &with_limit(0)).unwrap_err();
    assert!(matches!(err, DriverError::InvalidLineLength { length: 0 }));
}

struct BrokenPipe;

impl Write for BrokenPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn write_failures_end_the_session() {
    let err = serve("1\n".as_bytes(), BrokenPipe, &DriverConfig::default()).unwrap_err();
    assert!(matches!(err, DriverError::Io(ref e) if e.kind() == io::ErrorKind::BrokenPipe));
}

#[test]
fn reply_writer_appends_separator_line() {
    let mut writer = ReplyWriter::new(Vec::new(), LineEnding::Lf);
    writer.send("3").unwrap();
    assert_eq!(writer.into_inner(), b"3\n\n".to_vec());
}

fn answer(expression: &str, config: &DriverConfig) -> String {
    let mut output = Vec::new();
    answer_one(expression, &mut output, config).unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn single_expression_gets_exactly_one_reply() {
    let config = DriverConfig::default();
    assert_eq!(answer("1+1", &config), "2\n\n");
    assert_eq!(answer("", &config), "Error: Invalid syntax.\n\n");
    assert_eq!(answer("1+1\n2", &config), "Error: Invalid syntax.\n\n");
}

#[test]
fn single_expression_respects_the_line_limit() {
    assert_eq!(answer("1+1+1+1", &with_limit(4)),
               "Error: Input is longer than the maximum of 4 characters.\n\n");

    let mut output = Vec::new();
    let err = answer_one("1", &mut output, &with_limit(0)).unwrap_err();
    assert!(matches!(err, DriverError::InvalidLineLength { length: 0 }));
}

#[test]
fn bounded_line_cuts_at_a_character_boundary() {
    let line = Line::bounded("1\u{e9}9", 2);
    assert_eq!(line.text, "1");
    assert!(line.truncated);
}
