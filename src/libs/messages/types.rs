#[derive(Debug, Clone)]
pub enum Message {
    // === NORMALIZE MESSAGES ===
    NormalizeStarted {
        mode: String,
        count: usize,
        target: String,
    },
    ItemsNormalized {
        mode: String,
        adjusted: usize,
        total: usize,
    },
    NormalizeFailed(String), // error
    NormalizePreviewHeader,
    InvalidItemsWarning(usize),   // invalid count
    NoItemsToNormalize,
    TargetDurationNotSet(String), // mode

    // === VALIDATION MESSAGES ===
    ValidationHeader,
    ItemsValid(usize),          // count
    ItemsInvalid(usize, usize), // invalid, total
    NoItemsToValidate,

    // === RECORD FILE MESSAGES ===
    InputFileNotFound(String),       // path
    RecordsLoaded(usize, String),    // count, path
    ResultWritten(usize, String),    // count, path
    RecordFileReadFailed(String),    // path
    RecordFileWriteFailed(String),   // path
    UnknownRecordFormat(String),     // path
    ConfirmOverwrite(String),        // path
    ItemsHeader(String),             // path

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigModuleNormalizer,
    ConfigParseError(String),            // path
    ConfigTargetOutOfRange(String, u64), // mode, minutes

    // === PROMPTS ===
    PromptTargetDuration(String), // mode
    PromptCompressTarget,
    PromptStretchTarget,
    PromptOutputFormat,
    PromptSelectModules,
    InvalidDurationInput,

    // === GENERAL MESSAGES ===
    OperationCancelled,
}
