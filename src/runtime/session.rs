use crate::frontend::{Command, Statement, parse_script};
use crate::runtime::Value;
use dyn_array::{ArrayError, DynamicArray};
use std::fmt;

/// Failure while running a script. Lines are 1-based.
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptError {
    Parse { line: usize, message: String },
    Execute { line: usize, source: ArrayError },
}

impl ScriptError {
    pub fn line(&self) -> usize {
        match self {
            ScriptError::Parse { line, .. } | ScriptError::Execute { line, .. } => *line,
        }
    }
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptError::Parse { line, message } => {
                write!(f, "line {}: parse error: {}", line, message)
            }
            ScriptError::Execute { line, source } => write!(f, "line {}: {}", line, source),
        }
    }
}

impl std::error::Error for ScriptError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScriptError::Parse { .. } => None,
            ScriptError::Execute { source, .. } => Some(source),
        }
    }
}

/// Outcome of a script run.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Report {
    /// Output of every command that produces one, in execution order.
    pub outputs: Vec<String>,
    /// Commands that failed; only ever more than one in keep-going mode.
    pub failures: Vec<ScriptError>,
}

impl Report {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Executes list commands against one [`DynamicArray`] of [`Value`]s.
pub struct Session {
    array: DynamicArray<Value>,
    verbose: u8,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            array: DynamicArray::new(),
            verbose: 0,
        }
    }

    pub fn with_capacity(capacity: i64) -> Result<Self, ArrayError> {
        Ok(Self {
            array: DynamicArray::try_with_capacity(capacity)?,
            verbose: 0,
        })
    }

    /// Level 1 traces each command to stderr, level 2 adds size and capacity.
    pub fn verbose(mut self, level: u8) -> Self {
        self.verbose = level;
        self
    }

    pub fn array(&self) -> &DynamicArray<Value> {
        &self.array
    }

    /// Runs one command and returns its printable output, if any.
    ///
    /// A failed command leaves the session usable.
    pub fn execute(&mut self, command: &Command) -> Result<Option<String>, ArrayError> {
        let size = self.array.size();

        let output = match command {
            Command::New(None) => {
                self.array = DynamicArray::new();
                None
            }
            Command::New(Some(capacity)) => {
                self.array = DynamicArray::try_with_capacity(*capacity)?;
                None
            }
            Command::Add(value) => {
                self.array.add(value.clone());
                None
            }
            Command::Insert(index, value) => {
                self.array.add_at(to_index(*index, size)?, value.clone())?;
                None
            }
            Command::Get(index) => Some(self.array.get(to_index(*index, size)?)?.to_string()),
            Command::Remove(index) => Some(self.array.remove(to_index(*index, size)?)?.to_string()),
            Command::RemoveValue(value) => {
                Some(self.array.remove_value(value.as_ref()).to_string())
            }
            Command::Clear => {
                self.array.clear();
                None
            }
            Command::Size => Some(self.array.size().to_string()),
            Command::Capacity => Some(self.array.capacity().to_string()),
            Command::Print => Some(self.array.to_string()),
            Command::Sort => {
                self.array.quicksort()?;
                None
            }
        };

        Ok(output)
    }

    /// Runs parsed statements in order.
    ///
    /// Without `keep_going` the first failure is returned as the error. With
    /// it, failures are collected in the report and execution continues.
    pub fn run(
        &mut self,
        statements: &[Statement],
        keep_going: bool,
    ) -> Result<Report, ScriptError> {
        let mut report = Report::default();

        for statement in statements {
            if self.verbose > 0 {
                eprintln!("[line {}] {:?}", statement.line, statement.command);
            }

            match self.execute(&statement.command) {
                Ok(Some(output)) => report.outputs.push(output),
                Ok(None) => {}
                Err(source) => {
                    let err = ScriptError::Execute {
                        line: statement.line,
                        source,
                    };
                    if !keep_going {
                        return Err(err);
                    }
                    if self.verbose > 0 {
                        eprintln!("[line {}] failed: {}", statement.line, err);
                    }
                    report.failures.push(err);
                }
            }

            if self.verbose > 1 {
                eprintln!(
                    "[line {}] size = {}, capacity = {}",
                    statement.line,
                    self.array.size(),
                    self.array.capacity()
                );
            }
        }

        Ok(report)
    }

    /// Parses `source` completely, then runs it.
    pub fn run_script(&mut self, source: &str, keep_going: bool) -> Result<Report, ScriptError> {
        let statements = parse_script(source)?;
        self.run(&statements, keep_going)
    }
}

fn to_index(index: i64, size: usize) -> Result<usize, ArrayError> {
    usize::try_from(index).map_err(|_| ArrayError::InvalidIndex { index, size })
}
