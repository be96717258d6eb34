//! Single-writer actor for SQLite.
//!
//! SQLite allows one writer at a time. Rather than letting pooled connections
//! contend for the write lock, all mutations are funneled through one
//! background task that owns a dedicated connection and runs each job inside
//! an immediate transaction.

use std::any::Any;

use diesel::{Connection, SqliteConnection};
use renoplan_core::errors::{DatabaseError, Error, Result};
use tokio::sync::{mpsc, oneshot};

use super::DbPool;
use crate::errors::StorageError;

type ErasedResult = Result<Box<dyn Any + Send + 'static>>;
type WriteJob = Box<dyn FnOnce(&mut SqliteConnection) -> ErasedResult + Send + 'static>;

const WRITE_QUEUE_DEPTH: usize = 1024;

/// Cloneable handle for submitting write jobs to the actor.
#[derive(Clone)]
pub struct WriteHandle {
    tx: mpsc::Sender<(WriteJob, oneshot::Sender<ErasedResult>)>,
}

impl WriteHandle {
    /// Runs a job on the writer's connection, inside an immediate
    /// transaction, and returns its result.
    pub async fn exec<F, T>(&self, job: F) -> Result<T>
    where
        F: FnOnce(&mut SqliteConnection) -> Result<T> + Send + 'static,
        T: Any + Send + 'static,
    {
        let (reply_tx, reply_rx) = oneshot::channel();

        // Erase the job's return type so one channel carries every job.
        let erased: WriteJob = Box::new(move |conn| {
            job(conn).map(|v| Box::new(v) as Box<dyn Any + Send + 'static>)
        });

        self.tx.send((erased, reply_tx)).await.map_err(|_| {
            Error::Database(DatabaseError::Internal(
                "Write actor has stopped".to_string(),
            ))
        })?;

        let boxed = reply_rx.await.map_err(|_| {
            Error::Database(DatabaseError::Internal(
                "Write actor dropped the reply channel".to_string(),
            ))
        })??;

        boxed.downcast::<T>().map(|v| *v).map_err(|_| {
            Error::Database(DatabaseError::Internal(
                "Write actor returned an unexpected result type".to_string(),
            ))
        })
    }
}

/// Spawns the writer actor on the current Tokio runtime.
///
/// The actor holds one pooled connection for its whole lifetime and drains
/// jobs serially; it terminates once every `WriteHandle` is dropped.
pub fn spawn_writer(pool: DbPool) -> Result<WriteHandle> {
    let mut conn = super::get_connection(&pool)?;

    let (tx, mut rx) = mpsc::channel::<(WriteJob, oneshot::Sender<ErasedResult>)>(WRITE_QUEUE_DEPTH);

    tokio::spawn(async move {
        while let Some((job, reply_tx)) = rx.recv().await {
            let result: ErasedResult = conn
                .immediate_transaction::<_, StorageError, _>(|c| job(c).map_err(StorageError::from))
                .map_err(Error::from);

            // The caller may have given up waiting; that is not our problem.
            let _ = reply_tx.send(result);
        }
        log::debug!("Write actor shutting down: all handles dropped");
    });

    Ok(WriteHandle { tx })
}
