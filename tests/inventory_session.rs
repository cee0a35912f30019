use async_trait::async_trait;
use mesa_inventory::application::ports::{NoticeSink, ProductGateway};
use mesa_inventory::application::services::{InventoryService, Settlement};
use mesa_inventory::domain::entities::{
    InventoryStats, Product, ProductDraft, ProductFilter, ProductUpdate,
};
use mesa_inventory::domain::value_objects::{Category, CategoryFilter, ProductId};
use mesa_inventory::infrastructure::notice_log::NoticeLog;
use mesa_inventory::shared::error::AppError;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Small fake backend: keeps an authoritative product list and fails every
/// call while "offline".
struct ScriptedBackend {
    products: Mutex<Vec<Product>>,
    online: AtomicBool,
}

impl ScriptedBackend {
    fn new(products: Vec<Product>) -> Self {
        Self {
            products: Mutex::new(products),
            online: AtomicBool::new(true),
        }
    }

    fn set_online(&self, online: bool) {
        self.online.store(online, Ordering::SeqCst);
    }

    fn check_online(&self) -> Result<(), AppError> {
        if self.online.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(AppError::Network("backend unreachable".into()))
        }
    }
}

#[async_trait]
impl ProductGateway for ScriptedBackend {
    async fn list_products(&self) -> Result<Vec<Product>, AppError> {
        self.check_online()?;
        Ok(self.products.lock().await.clone())
    }

    async fn fetch_stats(&self) -> Result<InventoryStats, AppError> {
        self.check_online()?;
        let products = self.products.lock().await;
        let available = products.iter().filter(|p| p.available).count() as u32;
        let total = products.len() as u32;
        let average_price = if products.is_empty() {
            0.0
        } else {
            products.iter().map(|p| p.price).sum::<f64>() / products.len() as f64
        };
        Ok(InventoryStats {
            total_products: total,
            available_products: available,
            unavailable_products: total - available,
            average_price,
        })
    }

    async fn create_product(&self, draft: ProductDraft) -> Result<Product, AppError> {
        self.check_online()?;
        let mut products = self.products.lock().await;
        let next_id = products.iter().map(|p| p.id.value()).max().unwrap_or(0) + 1;
        let created = Product {
            id: ProductId::new(next_id).expect("backend ids are positive"),
            name: draft.name,
            description: draft.description,
            category: draft.category,
            price: draft.price,
            image: draft.image,
            sales: 0,
            available: true,
        };
        products.push(created.clone());
        Ok(created)
    }

    async fn update_product(
        &self,
        id: ProductId,
        update: ProductUpdate,
    ) -> Result<Product, AppError> {
        self.check_online()?;
        let mut products = self.products.lock().await;
        let product = products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| AppError::NotFound(format!("product {id}")))?;
        if let Some(name) = update.name {
            product.name = name;
        }
        if let Some(price) = update.price {
            product.price = price;
        }
        if let Some(available) = update.available {
            product.available = available;
        }
        Ok(product.clone())
    }

    async fn delete_product(&self, id: ProductId) -> Result<(), AppError> {
        self.check_online()?;
        let mut products = self.products.lock().await;
        let before = products.len();
        products.retain(|p| p.id != id);
        if products.len() == before {
            return Err(AppError::NotFound(format!("product {id}")));
        }
        Ok(())
    }

    async fn toggle_availability(&self, id: ProductId) -> Result<(), AppError> {
        self.check_online()?;
        let mut products = self.products.lock().await;
        let product = products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| AppError::NotFound(format!("product {id}")))?;
        product.available = !product.available;
        Ok(())
    }
}

fn product(id: i64, name: &str, category: &str, price: f64, available: bool) -> Product {
    Product {
        id: ProductId::new(id).expect("test ids are positive"),
        name: name.to_string(),
        description: None,
        category: Category::new(category.to_string()).expect("valid category"),
        price,
        image: None,
        sales: 0,
        available,
    }
}

fn setup() -> (InventoryService, Arc<ScriptedBackend>, Arc<NoticeLog>) {
    let backend = Arc::new(ScriptedBackend::new(vec![
        product(1, "Royal", "Hamburguesas", 18.9, true),
        product(2, "Inca Kola 500ml", "Bebidas", 4.5, true),
        product(3, "Torta Helada", "Postres", 7.0, false),
    ]));
    let notices = Arc::new(NoticeLog::new());
    let service = InventoryService::new(
        Arc::clone(&backend) as Arc<dyn ProductGateway>,
        Arc::clone(&notices) as Arc<dyn NoticeSink>,
    );
    (service, backend, notices)
}

#[tokio::test]
async fn staff_session_over_a_flaky_connection() {
    let (service, backend, notices) = setup();

    // open the screen
    service.load().await.expect("initial load");
    assert!(!service.is_loading());
    assert_eq!(service.products().await.len(), 3);
    assert_eq!(service.stats().await.expect("stats").total_products, 3);

    // narrow the list down
    let filter = ProductFilter {
        search_term: "inca".to_string(),
        category: CategoryFilter::parse("Bebidas").expect("valid filter"),
    };
    let drinks = service.filtered_products(&filter).await;
    assert_eq!(drinks.len(), 1);
    assert_eq!(drinks[0].name, "Inca Kola 500ml");

    // add a new combo; the collection and stats refresh from the backend
    let created = service
        .create_product(ProductDraft {
            name: "Combo Royal".to_string(),
            description: Some("Hamburguesa + bebida".to_string()),
            category: Category::new("Combos".to_string()).expect("valid category"),
            price: 21.5,
            image: None,
        })
        .await
        .expect("create succeeds");
    assert_eq!(created.id.value(), 4);
    assert_eq!(service.products().await.len(), 4);
    assert_eq!(service.stats().await.expect("stats").total_products, 4);

    // the connection drops; a toggle reverts and leaves one notice
    backend.set_online(false);
    let settlement = service
        .toggle_availability(ProductId::new(1).expect("valid id"))
        .await;
    assert!(matches!(settlement, Settlement::Reverted(_)));
    assert!(
        service
            .product(ProductId::new(1).expect("valid id"))
            .await
            .expect("product present")
            .available,
        "failed toggle must restore the confirmed value"
    );
    let pending = notices.drain().await;
    assert_eq!(pending.len(), 1);

    // back online the same toggle sticks
    backend.set_online(true);
    let settlement = service
        .toggle_availability(ProductId::new(1).expect("valid id"))
        .await;
    assert!(matches!(settlement, Settlement::Confirmed));
    assert!(
        !service
            .product(ProductId::new(1).expect("valid id"))
            .await
            .expect("product present")
            .available
    );
    assert_eq!(
        service.stats().await.expect("stats").available_products,
        2,
        "stats refresh after a confirmed toggle"
    );

    // remove the dessert; the authoritative list shrinks
    service
        .delete_product(ProductId::new(3).expect("valid id"))
        .await
        .expect("delete succeeds");
    assert_eq!(service.products().await.len(), 3);
    assert!(notices.drain().await.is_empty());
}

#[tokio::test]
async fn deleting_an_already_removed_product_records_the_generic_notice() {
    let (service, backend, notices) = setup();
    service.load().await.expect("initial load");

    // someone else already removed it on the backend
    backend
        .delete_product(ProductId::new(3).expect("valid id"))
        .await
        .expect("backend delete");

    let result = service
        .delete_product(ProductId::new(3).expect("valid id"))
        .await;
    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert_eq!(notices.drain().await.len(), 1);
}
