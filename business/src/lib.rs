pub mod application {
    pub mod identification {
        pub mod identify;
    }
}

pub mod domain {
    pub mod identification {
        pub mod confidence;
        pub mod errors;
        pub mod model;
        pub mod report;
        pub mod services;
        pub mod use_cases {
            pub mod identify;
        }
    }
    pub mod logger;
}
