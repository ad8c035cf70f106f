//! Bytes-to-statement pipeline with downstream handlers.
//!
//! Consumers of decoded statements (labelling, persistence, reporting)
//! implement [`StatementHandler`] and are registered explicitly, in the
//! order they should run.
//!
//! ```
//! use mt940_pl::import::{HandlerError, Importer, StatementHandler};
//! use mt940_pl::Statement;
//!
//! struct CountTransactions;
//!
//! impl StatementHandler for CountTransactions {
//!     fn name(&self) -> &str {
//!         "count"
//!     }
//!
//!     fn handle(&self, statement: &Statement) -> Result<(), HandlerError> {
//!         println!("{} transactions", statement.transactions.len());
//!         Ok(())
//!     }
//! }
//!
//! let importer = Importer::default().with_handler(CountTransactions);
//! let statement = importer.import(b":61:250706D10,00S\n:86:073\n~20Przelew").unwrap();
//! assert_eq!(statement.transactions.len(), 1);
//! ```

use tracing::{debug, info};

use crate::core::{Mt940Error, Statement};
use crate::encoding::{ResolverConfig, resolve};
use crate::mt940::decode_statement;

/// Failure reported by a [`StatementHandler`].
pub type HandlerError = Box<dyn std::error::Error + Send + Sync>;

/// Receives every statement the [`Importer`] decodes.
pub trait StatementHandler: Send + Sync {
    /// Short name used in logs and errors.
    fn name(&self) -> &str;

    fn handle(&self, statement: &Statement) -> Result<(), HandlerError>;
}

/// Resolves the encoding, decodes the statement, and passes it to each
/// registered handler in registration order.
#[derive(Default)]
pub struct Importer {
    config: ResolverConfig,
    handlers: Vec<Box<dyn StatementHandler>>,
}

impl Importer {
    pub fn new(config: ResolverConfig) -> Self {
        Self {
            config,
            handlers: Vec::new(),
        }
    }

    /// Register a handler after the ones already present.
    pub fn with_handler(mut self, handler: impl StatementHandler + 'static) -> Self {
        self.handlers.push(Box::new(handler));
        self
    }

    /// Names of the registered handlers, in run order.
    pub fn handler_names(&self) -> Vec<&str> {
        self.handlers.iter().map(|h| h.name()).collect()
    }

    /// Run the pipeline on raw file bytes.
    ///
    /// Stops at the first handler that fails; later handlers do not see the
    /// statement.
    pub fn import(&self, bytes: &[u8]) -> Result<Statement, Mt940Error> {
        let resolution = resolve(bytes, &self.config)?;
        let statement = decode_statement(&resolution.text);
        info!(
            codepage = %resolution.codepage,
            transactions = statement.transactions.len(),
            "statement imported"
        );

        for handler in &self.handlers {
            debug!(handler = handler.name(), "running statement handler");
            handler
                .handle(&statement)
                .map_err(|e| Mt940Error::Handler {
                    handler: handler.name().to_string(),
                    message: e.to_string(),
                })?;
        }

        Ok(statement)
    }
}

impl std::fmt::Debug for Importer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Importer")
            .field("config", &self.config)
            .field("handlers", &self.handler_names())
            .finish()
    }
}

/// Resolve and decode raw statement bytes with the default configuration.
pub fn decode_bytes(bytes: &[u8]) -> Result<Statement, Mt940Error> {
    Importer::default().import(bytes)
}
