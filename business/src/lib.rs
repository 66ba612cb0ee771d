pub mod application {
    pub mod expiry {
        pub mod calendar;
        pub mod estimate;
        pub mod expiring_soon;
    }
    pub mod shelf_life {
        pub mod list;
        pub mod lookup;
    }
    pub mod suggestion {
        pub mod get;
    }
}

pub mod domain {
    pub mod logger;
    pub mod shared {
        pub mod clock;
        pub mod text;
    }
    pub mod shelf_life {
        pub mod catalog;
        pub mod lookup;
        pub mod model;
        pub mod table;
        pub mod use_cases {
            pub mod list;
            pub mod lookup;
        }
    }
    pub mod grocery_list {
        pub mod errors;
        pub mod model;
    }
    pub mod suggestion {
        pub mod filter;
        pub mod use_cases {
            pub mod get;
        }
    }
    pub mod expiry {
        pub mod aggregator;
        pub mod calculator;
        pub mod calendar;
        pub mod errors;
        pub mod model;
        pub mod urgency;
        pub mod use_cases {
            pub mod calendar;
            pub mod estimate;
            pub mod expiring_soon;
        }
    }
}
