use std::cell::RefCell;

use crate::error::{ExportError, ExportResult};
use crate::process::{ToolInvocation, ToolRunner};

/// Tool runner that records every invocation and replies with canned
/// output, or fails every call with a given status.
pub struct RecordingRunner {
    pub invocations: RefCell<Vec<ToolInvocation>>,
    stdout: Vec<u8>,
    fail_code: Option<i32>,
}

impl RecordingRunner {
    pub fn returning(stdout: &[u8]) -> Self {
        Self {
            invocations: RefCell::new(Vec::new()),
            stdout: stdout.to_vec(),
            fail_code: None,
        }
    }

    pub fn failing(code: i32) -> Self {
        Self {
            invocations: RefCell::new(Vec::new()),
            stdout: Vec::new(),
            fail_code: Some(code),
        }
    }

    pub fn invocation(&self, index: usize) -> ToolInvocation {
        self.invocations.borrow()[index].clone()
    }

    pub fn call_count(&self) -> usize {
        self.invocations.borrow().len()
    }
}

impl ToolRunner for RecordingRunner {
    fn run(&self, invocation: &ToolInvocation) -> ExportResult<Vec<u8>> {
        self.invocations.borrow_mut().push(invocation.clone());

        match self.fail_code {
            Some(code) => Err(ExportError::Tool {
                tool: invocation.program.clone(),
                code,
                stderr: "synthetic failure".to_string(),
            }),
            None => Ok(self.stdout.clone()),
        }
    }
}
