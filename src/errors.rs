use fractic_server_error::{define_client_error, define_internal_error};

// Parsing-related.
define_client_error!(InvalidBusinessDate, "Invalid business date: {date}.", { date: &str });

// Validation-related (raised before any write).
define_client_error!(
    ValidationError,
    "Invalid {kind} record: {details}.",
    { kind: &str, details: &str }
);
define_client_error!(
    DuplicateName,
    "A subcategory or vendor named '{name}' already exists.",
    { name: &str }
);

// Lookup-related.
define_client_error!(ProjectNotFound, "Project '{id}' does not exist.", { id: &str });
define_client_error!(
    RecordNotFound,
    "No activity record with id '{id}' exists in any collection.",
    { id: &str }
);

// Store-related.
define_internal_error!(StoreError, "Document store operation failed: {details}.", { details: &str });
