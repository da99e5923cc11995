//! Mock of a file used as output sink.
use mockall::mock;

use std::io::{self, Write};

mock! {
    pub Sink {}
    impl Write for Sink {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize>;
        fn flush(&mut self) -> io::Result<()>;
    }
}
