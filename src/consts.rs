pub mod cli_consts {
    //! Panel Configuration Constants
    //!
    //! Defaults for polling, effects and UI buffers, grouped by functional area.

    // =============================================================================
    // QUEUE CONFIGURATION
    // =============================================================================

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// Buffer size of the channel carrying poller and timer messages to the UI loop
    pub const EVENT_QUEUE_SIZE: usize = 100;

    // =============================================================================
    // ENDPOINT CONFIGURATION
    // =============================================================================

    /// Endpoint used when neither the CLI, the environment nor the config file names one.
    pub const DEFAULT_ENDPOINT: &str = "http://localhost/apiprueba/api.php";

    /// Environment variable that overrides the configured endpoint.
    pub const ENDPOINT_ENV_VAR: &str = "DOCENTES_API_URL";

    /// HTTP connect and request timeout (seconds)
    pub const HTTP_TIMEOUT_SECS: u64 = 10;

    // =============================================================================
    // POLLING CONFIGURATION
    // =============================================================================

    pub mod polling {
        /// Fixed interval between record fetches (milliseconds)
        pub const POLL_INTERVAL_MS: u64 = 1000;
    }

    // =============================================================================
    // EFFECT CONFIGURATION
    // =============================================================================

    pub mod effects {
        /// How long a celebratory effect stays mounted after being triggered (milliseconds)
        pub const EFFECT_DURATION_MS: u64 = 5000;

        /// Number of confetti pieces drawn per effect instance
        pub const CONFETTI_PIECES: usize = 120;
    }

    // =============================================================================
    // UI CONFIGURATION
    // =============================================================================

    pub mod ui {
        /// Cards per grid row
        pub const CARD_COLUMNS: usize = 3;

        /// Card height in terminal rows (five attribute lines plus borders)
        pub const CARD_HEIGHT: u16 = 7;

        /// Delay between input polls in the UI loop (milliseconds)
        pub const INPUT_POLL_MS: u64 = 100;
    }
}
