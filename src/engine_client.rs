use hb_domain::{Command, MapError, PlayerId};
use itertools::Itertools;
use std::io::{BufRead, Write};
use std::str::{FromStr, SplitWhitespace};

#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    #[error("Engine closed the connection while we were waiting for {expected}")]
    UnexpectedEof { expected: &'static str },
    #[error("Missing {expected} in line '{line}'")]
    MissingToken { expected: &'static str, line: String },
    #[error("Can't parse {expected} from '{token}' in line '{line}'")]
    InvalidToken { expected: &'static str, token: String, line: String },
    #[error("Invalid game constants: {0}")]
    InvalidConstants(#[from] serde_json::Error),
    #[error("Invalid map: {0}")]
    InvalidMap(#[from] MapError),
    #[error("Engine sent an update for unknown player {0}")]
    UnknownPlayer(PlayerId),
    #[error("I/O error talking to the engine: {0}")]
    Io(#[from] std::io::Error),
}

/// Line based connection to the game engine. Reads the engine's messages and writes our replies.
pub struct EngineClient<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> EngineClient<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// `None` once the engine closed its end.
    pub fn read_line(&mut self) -> Result<Option<String>, ProtocolError> {
        let mut line = String::new();
        let bytes_read = self.reader.read_line(&mut line)?;
        if bytes_read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end().to_string()))
    }

    pub fn expect_line(&mut self, expected: &'static str) -> Result<String, ProtocolError> {
        self.read_line()?.ok_or(ProtocolError::UnexpectedEof { expected })
    }

    pub fn send_name(&mut self, name: &str) -> Result<(), ProtocolError> {
        writeln!(self.writer, "{}", name)?;
        self.writer.flush()?;
        Ok(())
    }

    pub fn send_commands(&mut self, commands: &[Command]) -> Result<(), ProtocolError> {
        writeln!(self.writer, "{}", commands.iter().join(" "))?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Whitespace separated values of a single protocol line.
pub struct Tokens<'a> {
    line: &'a str,
    iter: SplitWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    pub fn new(line: &'a str) -> Self {
        Self {
            line,
            iter: line.split_whitespace(),
        }
    }

    pub fn next<T: FromStr>(&mut self, expected: &'static str) -> Result<T, ProtocolError> {
        let token = self.iter.next().ok_or_else(|| ProtocolError::MissingToken {
            expected,
            line: self.line.to_string(),
        })?;

        token.parse().map_err(|_| ProtocolError::InvalidToken {
            expected,
            token: token.to_string(),
            line: self.line.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hb_domain::{Direction, ShipId};
    use std::io::Cursor;
    use test_log::test;

    #[test]
    fn reads_lines_until_eof() {
        let mut client = EngineClient::new(Cursor::new("3\n4 5\n"), Vec::new());

        assert_eq!(client.read_line().unwrap(), Some("3".to_string()));
        assert_eq!(client.read_line().unwrap(), Some("4 5".to_string()));
        assert_eq!(client.read_line().unwrap(), None);
        assert!(matches!(client.expect_line("turn number"), Err(ProtocolError::UnexpectedEof { expected: "turn number" })));
    }

    #[test]
    fn writes_one_line_per_turn() {
        let mut client = EngineClient::new(Cursor::new(""), Vec::new());

        client.send_name("FleetDispatchBot").unwrap();
        client
            .send_commands(&[Command::Move(ShipId(1), Direction::North), Command::Move(ShipId(4), Direction::Still), Command::Spawn])
            .unwrap();
        client.send_commands(&[]).unwrap();

        assert_eq!(String::from_utf8(client.writer).unwrap(), "FleetDispatchBot\nm 1 n m 4 o g\n\n");
    }

    #[test]
    fn tokens_report_missing_and_malformed_values() {
        let mut tokens = Tokens::new("7 x");

        assert_eq!(tokens.next::<usize>("ship id").unwrap(), 7);
        assert!(matches!(tokens.next::<i32>("x coordinate"), Err(ProtocolError::InvalidToken { .. })));
        assert!(matches!(tokens.next::<i32>("y coordinate"), Err(ProtocolError::MissingToken { expected: "y coordinate", .. })));
    }
}
