pub mod modules {
    pub mod activities {
        pub mod catalog;
        pub mod core {
            pub mod errors;
            pub mod model;
        }
        pub mod ports;
        pub mod use_cases {
            pub mod list_activities {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod signup_for_activity {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod unregister_from_activity {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod in_memory;
        }
    }
}

pub mod shell;
