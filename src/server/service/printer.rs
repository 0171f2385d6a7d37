//! Console demo printing student names from several threads.
//!
//! Names are taken in id order and split into three pairs. The first pair is
//! printed on the calling thread, the other two on freshly spawned OS threads
//! that are never joined, so the order of the last two pairs varies between
//! calls. The parallel mode takes the output lock once per name and lets the
//! two threads interleave inside a pair; the synchronized mode holds it for a
//! whole pair.

use sea_orm::DatabaseConnection;
use std::{
    io::{self, Write},
    sync::{Arc, Mutex, PoisonError},
    thread,
};

use crate::server::{data::student::StudentRepository, error::AppError};

const REQUIRED_STUDENTS: usize = 6;

type Output = Box<dyn Write + Send>;

#[derive(Clone)]
pub struct StudentNamePrinter {
    output: Arc<Mutex<Output>>,
}

impl Default for StudentNamePrinter {
    fn default() -> Self {
        Self::with_output(io::stdout())
    }
}

impl StudentNamePrinter {
    /// Printer writing to stdout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Printer writing to `output`, shared by every clone of the printer.
    pub fn with_output(output: impl Write + Send + 'static) -> Self {
        Self {
            output: Arc::new(Mutex::new(Box::new(output))),
        }
    }

    /// Prints six names; pairs from the two spawned threads may interleave
    pub async fn print_parallel(&self, db: &DatabaseConnection) -> Result<(), AppError> {
        tracing::info!("Printing student names in parallel");

        let [a, b, c, d, e, f] = load_names(db).await?;

        self.print_each(&[a, b])?;
        self.spawn(move |printer| printer.print_each(&[c, d]));
        self.spawn(move |printer| printer.print_each(&[e, f]));

        Ok(())
    }

    /// Prints six names, each pair under a single hold of the shared lock
    pub async fn print_synchronized(&self, db: &DatabaseConnection) -> Result<(), AppError> {
        tracing::info!("Printing student names synchronized");

        let [a, b, c, d, e, f] = load_names(db).await?;

        self.print_locked(&[a, b])?;
        self.spawn(move |printer| printer.print_locked(&[c, d]));
        self.spawn(move |printer| printer.print_locked(&[e, f]));

        Ok(())
    }

    fn spawn<F>(&self, print: F)
    where
        F: FnOnce(&StudentNamePrinter) -> io::Result<()> + Send + 'static,
    {
        let printer = self.clone();
        thread::spawn(move || {
            if let Err(err) = print(&printer) {
                tracing::warn!("Failed to print student names: {}", err);
            }
        });
    }

    /// Locks the output separately for every name.
    fn print_each(&self, names: &[String]) -> io::Result<()> {
        for name in names {
            self.print_locked(std::slice::from_ref(name))?;
        }

        Ok(())
    }

    /// Writes all `names` under a single hold of the output lock.
    fn print_locked(&self, names: &[String]) -> io::Result<()> {
        let mut output = self.output.lock().unwrap_or_else(PoisonError::into_inner);
        for name in names {
            writeln!(output, "{}", name)?;
        }
        output.flush()
    }
}

/// Loads the names of the first six students by id.
async fn load_names(db: &DatabaseConnection) -> Result<[String; REQUIRED_STUDENTS], AppError> {
    let students = StudentRepository::new(db).get_all().await?;
    let count = students.len();

    let names: Vec<String> = students
        .into_iter()
        .take(REQUIRED_STUDENTS)
        .map(|s| s.name)
        .collect();

    names.try_into().map_err(|_| {
        AppError::BadRequest(format!(
            "At least {} students are required, found {}",
            REQUIRED_STUDENTS, count
        ))
    })
}
