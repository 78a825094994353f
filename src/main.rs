use std::time::Duration;

use tracing::{error, info, warn, Instrument};

use catalog_controller::{
    setup_tracing, CatalogConfig, CatalogError, CatalogSystem, CatalogView, SortOption,
};

fn log_view(label: &str, view: &CatalogView) {
    match view {
        CatalogView::Loading => info!(label, "Loading products..."),
        CatalogView::Empty => info!(label, "No products found."),
        CatalogView::Ready(products) => {
            for product in products {
                info!(
                    label,
                    product_id = %product.id,
                    product_name = %product.name,
                    price = %product.price,
                    stock = %product.stock,
                    "Listed"
                );
            }
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = CatalogConfig::from_env().map_err(|e| e.to_string())?;
    let debounce = config.debounce;
    info!(?config, "Starting catalog controller");

    let mut system = CatalogSystem::new(config);
    system.spawn_initial_load();
    log_view("startup", &system.view().await.map_err(|e| e.to_string())?);

    match system.wait_loaded().await {
        Some(Ok(count)) => info!(count, "Catalog ready"),
        Some(Err(e)) => return Err(e.to_string()),
        None => warn!("No initial load was started"),
    }
    log_view("initial", &system.view().await.map_err(|e| e.to_string())?);

    // Typing burst: only the settled term reaches the view
    let span = tracing::info_span!("search");
    async {
        for raw in ["l", "la", "lam", "lamp"] {
            system.set_search(raw);
            tokio::time::sleep(Duration::from_millis(50)).await;
        }
        tokio::time::sleep(debounce + Duration::from_millis(50)).await;
        info!(term = %system.query().search, "Search settled");
    }
    .instrument(span)
    .await;
    log_view("search", &system.view().await.map_err(|e| e.to_string())?);

    system.set_search("");
    system.set_sort(SortOption::StockDesc);
    tokio::time::sleep(debounce + Duration::from_millis(50)).await;

    let client = system.client.clone();
    let span = tracing::info_span!("create_product");
    let created = async {
        let mut draft = client.begin_create().await?;
        draft.name = "Wooden Mug".into();
        draft.price = 45_000.0;
        draft.stock = 12;
        client.submit(draft).await
    }
    .instrument(span)
    .await;
    match created {
        Ok(committed) => info!(?committed, "Product committed"),
        Err(e) => error!(error = %e, "Create failed"),
    }

    let span = tracing::info_span!("rename_conflict");
    let renamed: Result<_, CatalogError> = async {
        let Some(mut draft) = client.begin_edit(1).await? else {
            return Err(CatalogError::NoActiveForm);
        };
        draft.name = "Modern Chair".into();
        let outcome = client.submit(draft).await;
        client.close_form().await?;
        outcome
    }
    .instrument(span)
    .await;
    if let Err(e) = renamed {
        warn!(error = %e, "Rename refused");
    }

    if let Some(product) = client.request_delete(4).await.map_err(|e| e.to_string())? {
        info!(product_name = %product.name, "Confirming delete");
        client.confirm_delete().await.map_err(|e| e.to_string())?;
    }

    log_view("final", &system.view().await.map_err(|e| e.to_string())?);

    system.shutdown().await.map_err(|e| e.to_string())?;
    info!("Application completed successfully");
    Ok(())
}
