// Crate-internal.
// ---

pub(crate) mod data {
    pub(crate) mod models {
        pub(crate) mod business_date_model;
    }
    pub(crate) mod stores {
        pub(crate) mod memory_store;
    }
}

pub(crate) mod domain {
    pub(crate) mod entities {
        pub(crate) mod activity;
        pub(crate) mod assignment;
        pub(crate) mod draft;
        pub(crate) mod expense;
        pub(crate) mod feed;
        pub(crate) mod income;
        pub(crate) mod photo;
        pub(crate) mod project;
        pub(crate) mod subcategory;
    }
    pub(crate) mod logic {
        pub(crate) mod activity_feed;
        pub(crate) mod aggregation;
        pub(crate) mod dirty;
        pub(crate) mod money;
        pub(crate) mod usage_counter;
    }
    pub(crate) mod repositories {
        pub(crate) mod transaction_store;
    }
    pub(crate) mod usecases {
        pub(crate) mod ledger_usecase;
        pub(crate) mod recompute_usecase;
        pub(crate) mod record_usecase;
    }
}

pub(crate) mod presentation {
    pub(crate) mod activity_fmt;
}

// Public exports.
// ---

#[doc(hidden)]
#[allow(unused_imports)]
pub mod exports {
    // This mod represents how clients see the library, and can differ from the
    // internal structure.
    //
    // The contents of this mod are re-exported in the root of the crate.

    pub mod entities {
        pub use crate::domain::entities::activity::*;
        pub use crate::domain::entities::assignment::*;
        pub use crate::domain::entities::draft::*;
        pub use crate::domain::entities::expense::*;
        pub use crate::domain::entities::feed::*;
        pub use crate::domain::entities::income::*;
        pub use crate::domain::entities::photo::*;
        pub use crate::domain::entities::project::*;
        pub use crate::domain::entities::subcategory::*;
    }

    pub mod signals {
        pub use crate::domain::logic::dirty::*;
    }

    pub mod stores {
        pub use crate::data::stores::memory_store::MemoryStore;
        pub use crate::domain::repositories::transaction_store::*;
    }

    pub mod usecases {
        pub use crate::domain::usecases::ledger_usecase::LedgerUsecase;
        pub use crate::domain::usecases::recompute_usecase::RecomputeHandler;
        pub use crate::domain::usecases::record_usecase::RecordMutationUsecase;
    }
}
