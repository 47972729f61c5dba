use std::sync::Arc;

use logger::TracingLogger;

use http_client::cart_service::CartServiceHttp;
use http_client::catalog_service::CatalogServiceHttp;
use http_client::client::StorefrontClient;

use business::application::cart::add::AddToCartUseCaseImpl;
use business::application::cart::clear::ClearCartUseCaseImpl;
use business::application::cart::delete_item::DeleteCartItemUseCaseImpl;
use business::application::cart::fetch::FetchCartItemsUseCaseImpl;
use business::application::cart::set_items::SetCartItemsUseCaseImpl;
use business::application::cart::store::CartStore;
use business::application::cart::update_quantity::UpdateQuantityUseCaseImpl;
use business::application::catalog::get_details::GetProductDetailsUseCaseImpl;
use business::application::catalog::list_categories::ListCategoriesUseCaseImpl;
use business::application::catalog::list_products::ListProductsUseCaseImpl;
use business::application::session::store::SessionStore;

use crate::commands::cart::CartHandler;
use crate::commands::catalog::CatalogHandler;
use crate::config::app_config::AppConfig;
use crate::notifier::TerminalNotifier;

pub struct DependencyContainer {
    pub session: Arc<SessionStore>,
    pub cart_store: Arc<CartStore>,
    pub cart_handler: Arc<CartHandler>,
    pub catalog_handler: CatalogHandler,
}

impl DependencyContainer {
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);
        let notifier = Arc::new(TerminalNotifier);

        // Session and cart state
        let session = Arc::new(match config.session.user_id.clone() {
            Some(user_id) => SessionStore::signed_in(user_id),
            None => SessionStore::new(),
        });
        let cart_store = Arc::new(CartStore::new());

        // Infrastructure adapters
        let cart_service = Arc::new(CartServiceHttp::new(StorefrontClient::new(
            config.api.base_url.clone(),
            config.api.timeout,
        )?));
        let catalog_service = Arc::new(CatalogServiceHttp::new(StorefrontClient::new(
            config.api.base_url.clone(),
            config.api.timeout,
        )?));

        // Cart use cases
        let add_use_case = Arc::new(AddToCartUseCaseImpl {
            service: cart_service.clone(),
            session: session.clone(),
            store: cart_store.clone(),
            notifier: notifier.clone(),
            logger: logger.clone(),
        });
        let fetch_use_case = Arc::new(FetchCartItemsUseCaseImpl {
            service: cart_service.clone(),
            session: session.clone(),
            store: cart_store.clone(),
            notifier: notifier.clone(),
            logger: logger.clone(),
        });
        let update_quantity_use_case = Arc::new(UpdateQuantityUseCaseImpl {
            service: cart_service.clone(),
            session: session.clone(),
            store: cart_store.clone(),
            notifier: notifier.clone(),
            logger: logger.clone(),
        });
        let delete_item_use_case = Arc::new(DeleteCartItemUseCaseImpl {
            service: cart_service.clone(),
            session: session.clone(),
            store: cart_store.clone(),
            notifier: notifier.clone(),
            logger: logger.clone(),
        });
        let clear_use_case = Arc::new(ClearCartUseCaseImpl {
            service: cart_service,
            session: session.clone(),
            store: cart_store.clone(),
            notifier,
            logger: logger.clone(),
        });
        let set_items_use_case = Arc::new(SetCartItemsUseCaseImpl {
            store: cart_store.clone(),
            logger: logger.clone(),
        });

        // Catalog use cases
        let list_products_use_case = Arc::new(ListProductsUseCaseImpl {
            service: catalog_service.clone(),
            logger: logger.clone(),
        });
        let get_details_use_case = Arc::new(GetProductDetailsUseCaseImpl {
            service: catalog_service.clone(),
            logger: logger.clone(),
        });
        let list_categories_use_case = Arc::new(ListCategoriesUseCaseImpl {
            service: catalog_service,
            logger,
        });

        let cart_handler = Arc::new(CartHandler::new(
            add_use_case,
            fetch_use_case,
            update_quantity_use_case,
            delete_item_use_case,
            clear_use_case,
            set_items_use_case,
        ));
        let catalog_handler = CatalogHandler::new(
            list_products_use_case,
            get_details_use_case,
            list_categories_use_case,
        );

        Ok(Self {
            session,
            cart_store,
            cart_handler,
            catalog_handler,
        })
    }
}
