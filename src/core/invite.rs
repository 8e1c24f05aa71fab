use crate::core::loader::load_customers;
use crate::core::report::{render, OutputFormat};
use crate::core::selector::select_with_radius;
use crate::domain::ports::{ConfigProvider, Storage};
use crate::utils::error::Result;

pub struct InviteEngine<S: Storage> {
    storage: S,
}

impl<S: Storage> InviteEngine<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Load, select and render in one pass. Read and parse failures are
    /// returned as errors, never as an empty report.
    pub fn run<C: ConfigProvider>(&self, config: &C, format: OutputFormat) -> Result<String> {
        tracing::info!("Loading customers from {}", config.input_file().display());
        let customers = load_customers(&self.storage, config.input_file())?;
        tracing::info!("Loaded {} customers", customers.len());

        let invitees = select_with_radius(
            &customers,
            config.origin(),
            config.within_km(),
            config.earth_radius_km(),
        );
        tracing::info!(
            "{} customers within {} km of {}",
            invitees.len(),
            config.within_km(),
            config.origin()
        );

        render(&invitees, config.origin(), config.within_km(), format)
    }
}
