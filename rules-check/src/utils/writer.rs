use std::io::{Stderr, Stdout, Write};

use crate::rules::Result;

/// Standard output and standard error of a command, swappable for in-memory
/// buffers.
pub struct Writer {
    buffer: WriteBuffer,
    err: WriteBuffer,
}

impl Writer {
    pub fn new(buffer: WriteBuffer, err: WriteBuffer) -> Self {
        Self { buffer, err }
    }

    pub fn write_err(&mut self, message: String) -> std::io::Result<()> {
        writeln!(self.err, "{message}")
    }

    pub fn into_string(self) -> Result<String> {
        self.buffer.into_string()
    }

    pub fn err_to_string(self) -> Result<String> {
        self.err.into_string()
    }

    /// Captured standard output with colour codes removed.
    pub fn stripped(self) -> Result<String> {
        self.buffer.stripped()
    }

    pub fn err_to_stripped(self) -> Result<String> {
        self.err.stripped()
    }
}

impl Write for Writer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.buffer.write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.buffer.flush()?;
        self.err.flush()
    }
}

pub enum WriteBuffer {
    Stdout(Stdout),
    Stderr(Stderr),
    Vec(Vec<u8>),
}

impl WriteBuffer {
    fn into_string(self) -> Result<String> {
        match self {
            WriteBuffer::Vec(vec) => Ok(String::from_utf8(vec)?),
            WriteBuffer::Stdout(..) | WriteBuffer::Stderr(..) => Ok(String::new()),
        }
    }

    fn stripped(self) -> Result<String> {
        match self {
            WriteBuffer::Vec(vec) => Ok(String::from_utf8(strip_ansi_escapes::strip(vec)?)?),
            WriteBuffer::Stdout(..) | WriteBuffer::Stderr(..) => Ok(String::new()),
        }
    }
}

impl Write for WriteBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        match self {
            WriteBuffer::Stdout(stdout) => stdout.write(buf),
            WriteBuffer::Stderr(stderr) => stderr.write(buf),
            WriteBuffer::Vec(vec) => vec.write(buf),
        }
    }

    fn flush(&mut self) -> std::io::Result<()> {
        match self {
            WriteBuffer::Stdout(stdout) => stdout.flush(),
            WriteBuffer::Stderr(stderr) => stderr.flush(),
            WriteBuffer::Vec(vec) => vec.flush(),
        }
    }
}
