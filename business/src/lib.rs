pub mod application {
    pub mod session {
        pub mod accept_suggestion;
        pub mod add_item;
        pub mod get_snapshot;
        pub mod remove_basket_item;
        pub mod remove_suggestion;
        pub mod set_query;
    }
    pub mod sync {
        pub mod synchronizer;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod shared {
        pub mod identity;
    }
    pub mod product {
        pub mod errors;
        pub mod model;
    }
    pub mod basket {
        pub mod errors;
        pub mod model;
        pub mod store;
    }
    pub mod suggestion {
        pub mod errors;
        pub mod gateway;
        pub mod model;
        pub mod store;
    }
    pub mod sync {
        pub mod controller;
        pub mod fetch;
        pub mod trigger;
    }
    pub mod session {
        pub mod errors;
        pub mod model;
        pub mod use_cases {
            pub mod accept_suggestion;
            pub mod add_item;
            pub mod get_snapshot;
            pub mod remove_basket_item;
            pub mod remove_suggestion;
            pub mod set_query;
        }
    }
}
