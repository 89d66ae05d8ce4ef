pub mod application {
    pub mod catalog {
        pub mod get_stats;
    }
    pub mod feed {
        pub mod load;
    }
    pub mod news {
        pub mod load;
    }
    pub mod product {
        pub mod create;
        pub mod delete;
        pub mod get_all;
    }
    pub mod provider {
        pub mod create;
        pub mod delete;
        pub mod get_all;
    }
    pub mod session {
        pub mod get_current;
        pub mod log_in;
        pub mod log_out;
    }
    pub mod weather {
        pub mod lookup;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod catalog {
        pub mod entity;
        pub mod id_sequence;
        pub mod repository;
        pub mod stats;
        pub mod use_cases {
            pub mod get_stats;
        }
    }
    pub mod feed {
        pub mod errors;
        pub mod model;
        pub mod services;
        pub mod use_cases {
            pub mod load;
        }
    }
    pub mod news {
        pub mod cleanup;
        pub mod errors;
        pub mod model;
        pub mod services;
        pub mod use_cases {
            pub mod load;
        }
    }
    pub mod product {
        pub mod errors;
        pub mod form;
        pub mod model;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod get_all;
        }
    }
    pub mod provider {
        pub mod errors;
        pub mod model;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod get_all;
        }
    }
    pub mod session {
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod get_current;
            pub mod log_in;
            pub mod log_out;
        }
    }
    pub mod weather {
        pub mod errors;
        pub mod model;
        pub mod services;
        pub mod use_cases {
            pub mod lookup;
        }
    }
}
