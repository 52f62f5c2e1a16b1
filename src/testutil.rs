//! In-memory sink shared between the crate's test modules.

use std::{
    io::{self, Write},
    sync::{Arc, Mutex},
};

use crate::config::LogSink;

/// Clonable writer over a shared byte buffer.
#[derive(Clone, Default)]
pub(crate) struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl SharedBuf {
    pub(crate) fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }

    pub(crate) fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_owned).collect()
    }

    pub(crate) fn sink(&self) -> LogSink {
        let writer: Box<dyn Write + Send> = Box::new(self.clone());
        Arc::new(Mutex::new(writer))
    }
}

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
