use rowkit_core::{
    async_trait,
    driver::{Connection, Driver, Operation, Response, RowSet},
    Result,
};

use std::{
    borrow::Cow,
    collections::VecDeque,
    sync::{Arc, Mutex},
};

/// A driver that records every operation and answers from a script.
///
/// Responses are handed out in the order they were pushed. Once the script
/// runs dry, queries return no rows and mutations affect no rows.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDriver {
    state: Arc<Mutex<State>>,
}

#[derive(Debug, Default)]
struct State {
    /// Log of all operations executed through this driver
    ops_log: Vec<Operation>,

    responses: VecDeque<Result<Response>>,
}

impl ScriptedDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a query response.
    pub fn push_rows(&self, columns: &[&str], rows: &[&[Option<&str>]]) -> &Self {
        let columns = columns.iter().map(|s| s.to_string()).collect();
        let rows = rows
            .iter()
            .map(|row| row.iter().map(|v| v.map(str::to_string)).collect())
            .collect();

        self.push(Ok(Response::row_set(RowSet::from_vec(columns, rows))))
    }

    /// Queues a mutation response.
    pub fn push_count(&self, count: u64, last_insert_id: Option<u64>) -> &Self {
        self.push(Ok(Response::inserted(count, last_insert_id)))
    }

    pub fn push_err(&self, err: rowkit_core::Error) -> &Self {
        self.push(Err(err))
    }

    fn push(&self, response: Result<Response>) -> &Self {
        self.state
            .lock()
            .expect("Failed to acquire state lock")
            .responses
            .push_back(response);
        self
    }

    pub fn ops(&self) -> Vec<Operation> {
        self.state
            .lock()
            .expect("Failed to acquire state lock")
            .ops_log
            .clone()
    }

    /// Every statement executed so far, rendered with inline literals.
    pub fn sql(&self) -> Vec<String> {
        self.ops()
            .iter()
            .map(|op| rowkit_sql::inline(op.statement()))
            .collect()
    }
}

#[async_trait]
impl Driver for ScriptedDriver {
    fn url(&self) -> Cow<'_, str> {
        Cow::Borrowed("scripted:")
    }

    async fn connect(&self) -> Result<Box<dyn Connection>> {
        Ok(Box::new(ScriptedConnection {
            state: self.state.clone(),
        }))
    }
}

#[derive(Debug)]
struct ScriptedConnection {
    state: Arc<Mutex<State>>,
}

#[async_trait]
impl Connection for ScriptedConnection {
    async fn exec(&mut self, operation: Operation) -> Result<Response> {
        let mut state = self.state.lock().expect("Failed to acquire state lock");

        let returns_rows = operation.is_query_sql();
        state.ops_log.push(operation);

        match state.responses.pop_front() {
            Some(response) => response,
            None if returns_rows => Ok(Response::empty_row_set()),
            None => Ok(Response::count(0)),
        }
    }
}
