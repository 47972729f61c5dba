pub mod application {
    pub mod cart {
        pub mod add;
        pub mod clear;
        pub mod delete_item;
        pub mod fetch;
        pub mod set_items;
        pub mod store;
        pub mod update_quantity;
        mod workflow;
        #[cfg(test)]
        mod test_support;
    }
    pub mod catalog {
        pub mod get_details;
        pub mod list_categories;
        pub mod list_products;
        #[cfg(test)]
        mod test_support;
    }
    pub mod session {
        pub mod store;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod notifier;
    pub mod shared {
        pub mod value_objects;
    }
    pub mod cart {
        pub mod errors;
        pub mod model;
        pub mod operation;
        pub mod services;
        pub mod state;
        pub mod use_cases {
            pub mod add;
            pub mod clear;
            pub mod delete_item;
            pub mod fetch;
            pub mod set_items;
            pub mod update_quantity;
        }
    }
    pub mod catalog {
        pub mod errors;
        pub mod model;
        pub mod selection;
        pub mod services;
        pub mod use_cases {
            pub mod get_details;
            pub mod list_categories;
            pub mod list_products;
        }
    }
    pub mod session {
        pub mod services;
    }
}
