//! Optional log of what a demo did. Each line records the program, the time since start, the
//! level and the module that logged it, e.g.
//!
//! `runtime-error 0.000 INFO debug_demos::divider: Dividing 5 by 0`

use anyhow::anyhow;
use anyhow::Context;
use anyhow::Result;
use log::info;
use log::LevelFilter;
use std::fs::File;
use std::io::BufWriter;
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;
use std::time::Duration;
use std::time::Instant;

const MAX_LEVEL: LevelFilter = LevelFilter::Info;

/// Sends log records from the program `program` to `output_path`. Can only be called once per
/// process.
pub fn init(program: &str, output_path: &Path) -> Result<()> {
    let file = File::create(output_path)
        .with_context(|| format!("Failed to create log file `{}`", output_path.display()))?;
    let logger = DemoLogger {
        program: program.to_owned(),
        out: Mutex::new(BufWriter::new(file)),
        start: Instant::now(),
    };
    log::set_boxed_logger(Box::new(logger)).map_err(|_| anyhow!("Logger already installed"))?;
    log::set_max_level(MAX_LEVEL);
    info!("Logging to `{}`", output_path.display());
    Ok(())
}

struct DemoLogger {
    program: String,
    out: Mutex<BufWriter<File>>,
    start: Instant,
}

impl log::Log for DemoLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= MAX_LEVEL
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let Ok(mut out) = self.out.lock() else {
            return;
        };
        // The logger is never dropped, so nothing else flushes the buffer.
        let _ = write_record(&mut *out, &self.program, self.start.elapsed(), record)
            .and_then(|()| out.flush());
    }

    fn flush(&self) {
        if let Ok(mut out) = self.out.lock() {
            let _ = out.flush();
        }
    }
}

fn write_record(
    out: &mut impl Write,
    program: &str,
    elapsed: Duration,
    record: &log::Record,
) -> std::io::Result<()> {
    writeln!(
        out,
        "{program} {:0.3} {} {}: {}",
        elapsed.as_secs_f32(),
        record.level(),
        record.target(),
        record.args()
    )
}
