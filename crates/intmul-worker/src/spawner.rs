use std::ffi::OsString;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;
use std::process::{Child, Command, Stdio};
use std::thread::{self, JoinHandle};

use intmul_core::model::OperandPair;
use intmul_input::read_line;

use crate::error::WorkerError;
use crate::pipe::pipe;
use crate::worker::serve;

/// Default stack for a thread unit. Units recurse one level each, so this stays small.
pub const DEFAULT_UNIT_STACK_SIZE: usize = 256 * 1024;

/// Starts concurrent units that each run the multiply contract on a fresh channel.
pub trait Spawner {
    /// Short backend name for logs and telemetry.
    fn name(&self) -> &'static str;

    fn spawn(&self) -> io::Result<UnitHandle>;
}

/// Observes how a unit terminated.
pub trait Reap: Send {
    /// `Err` carries a human-readable reason for an unsuccessful exit.
    fn reap(self: Box<Self>) -> Result<(), String>;
}

/// Parent side of a running unit: its inbound and outbound channel ends and
/// the means to wait for it.
pub struct UnitHandle {
    inbound: Option<Box<dyn Write + Send>>,
    outbound: Option<Box<dyn BufRead + Send>>,
    exit: Box<dyn Reap>,
}

impl UnitHandle {
    pub fn new(
        inbound: Box<dyn Write + Send>,
        outbound: Box<dyn BufRead + Send>,
        exit: Box<dyn Reap>,
    ) -> Self {
        Self {
            inbound: Some(inbound),
            outbound: Some(outbound),
            exit,
        }
    }

    /// Write both operands as newline-terminated lines, then close the inbound end.
    pub fn send(&mut self, pair: &OperandPair) -> io::Result<()> {
        let mut inbound = self
            .inbound
            .take()
            .ok_or_else(|| io::Error::new(io::ErrorKind::BrokenPipe, "operands already sent"))?;
        inbound.write_all(format!("{}\n{}\n", pair.a(), pair.b()).as_bytes())?;
        inbound.flush()
    }

    /// Read the unit's single result line, newline included. `None` if it closed the channel first.
    pub fn receive(&mut self) -> io::Result<Option<String>> {
        match self.outbound.as_mut() {
            Some(outbound) => read_line(outbound),
            None => Ok(None),
        }
    }

    /// Close both channel ends and block until the unit has terminated.
    pub fn wait(mut self) -> Result<(), String> {
        self.inbound.take();
        self.outbound.take();
        self.exit.reap()
    }
}

/// Runs each unit on its own OS thread, connected by in-memory pipes.
#[derive(Debug, Clone, Copy)]
pub struct ThreadSpawner {
    stack_size: usize,
}

impl ThreadSpawner {
    pub fn with_stack_size(stack_size: usize) -> Self {
        Self { stack_size }
    }
}

impl Default for ThreadSpawner {
    fn default() -> Self {
        Self::with_stack_size(DEFAULT_UNIT_STACK_SIZE)
    }
}

impl Spawner for ThreadSpawner {
    fn name(&self) -> &'static str {
        "thread"
    }

    fn spawn(&self) -> io::Result<UnitHandle> {
        let (inbound_tx, inbound_rx) = pipe();
        let (outbound_tx, outbound_rx) = pipe();
        let spawner = *self;

        let handle = thread::Builder::new()
            .name("intmul-unit".to_string())
            .stack_size(self.stack_size)
            .spawn(move || serve(inbound_rx, outbound_tx, &spawner))?;

        Ok(UnitHandle::new(
            Box::new(inbound_tx),
            Box::new(outbound_rx),
            Box::new(ThreadExit(handle)),
        ))
    }
}

struct ThreadExit(JoinHandle<Result<(), WorkerError>>);

impl Reap for ThreadExit {
    fn reap(self: Box<Self>) -> Result<(), String> {
        match self.0.join() {
            Ok(Ok(())) => Ok(()),
            Ok(Err(e)) => Err(e.to_string()),
            Err(_) => Err("unit panicked".to_string()),
        }
    }
}

/// Runs each unit as a child process with piped stdin/stdout.
///
/// The child inherits stderr so its diagnostics reach the user directly.
#[derive(Debug, Clone)]
pub struct ProcessSpawner {
    program: PathBuf,
    args: Vec<OsString>,
}

impl ProcessSpawner {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, A>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<OsString>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }
}

impl Spawner for ProcessSpawner {
    fn name(&self) -> &'static str {
        "process"
    }

    fn spawn(&self) -> io::Result<UnitHandle> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()?;

        let stdin = child.stdin.take();
        let stdout = child.stdout.take();
        let (Some(stdin), Some(stdout)) = (stdin, stdout) else {
            let _ = child.kill();
            let _ = child.wait();
            return Err(io::Error::other("unit process has no piped stdio"));
        };

        Ok(UnitHandle::new(
            Box::new(stdin),
            Box::new(BufReader::new(stdout)),
            Box::new(ProcessExit(child)),
        ))
    }
}

struct ProcessExit(Child);

impl Reap for ProcessExit {
    fn reap(mut self: Box<Self>) -> Result<(), String> {
        match self.0.wait() {
            Ok(status) if status.success() => Ok(()),
            Ok(status) => Err(format!("unit exited with {status}")),
            Err(e) => Err(format!("waiting for unit failed: {e}")),
        }
    }
}
