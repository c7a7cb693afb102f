//! # Composition Root
//!
//! 애플리케이션의 모든 싱글톤을 한 곳에서 명시적으로 등록합니다.
//! 등록 순서가 곧 계층 순서이며, 의존성 그래프는 아래와 같습니다.
//!
//! ```text
//! BillService ──────────┬─▶ BillQuery ──────────▶ dyn BillRepository
//!                       └─────────────────────────▶ dyn BillRepository
//! ContainerService ─────┬─▶ ContainerQuery ─────▶ dyn ContainerRepository
//!                       ├─▶ BillQuery
//!                       └─────────────────────────▶ dyn ContainerRepository
//! CuttingTestService ───┬─▶ CuttingTestQuery ───▶ dyn CuttingTestRepository
//!                       ├─▶ ContainerQuery
//!                       └─────────────────────────▶ dyn CuttingTestRepository
//! ```

use std::sync::Arc;

use log::info;

use crate::config::RegistryConfig;
use crate::core::errors::RegistryError;
use crate::core::registry::{ServiceRegistry, short_type_name};
use crate::queries::{BillQuery, ContainerQuery, CuttingTestQuery};
use crate::repositories::bills::{BillRepository, InMemoryBillRepository};
use crate::repositories::containers::{ContainerRepository, InMemoryContainerRepository};
use crate::repositories::cutting_tests::{CuttingTestRepository, InMemoryCuttingTestRepository};
use crate::services::{BillService, ContainerService, CuttingTestService};
use crate::utils::display_terminal::{
    print_boxed_title, print_final_summary, print_step_complete, print_step_start, print_sub_task,
};

/// 모든 컴포넌트를 등록한 레지스트리를 반환합니다. 어떤 팩토리도 실행하지 않습니다.
pub fn init() -> ServiceRegistry {
    let registry = ServiceRegistry::new();

    register_repositories(&registry);
    register_queries(&registry);
    register_services(&registry);

    info!("Composition root registered {} components", registry.len());
    registry
}

/// 설정에 따라 레지스트리를 만들고, 필요하면 모든 컴포넌트를 미리 생성합니다.
pub fn init_with(config: &RegistryConfig) -> Result<ServiceRegistry, RegistryError> {
    let registry = init();

    if config.eager_init {
        if config.print_summary {
            print_boxed_title("🔄 INITIALIZING SERVICE REGISTRY");
            print_step_start(1, "Materializing components");
        }

        let count = registry.initialize_all()?;

        if config.print_summary {
            print_step_complete(1, "Components materialized", count);
        }
    }

    if config.print_summary {
        print_summary(&registry);
    }

    Ok(registry)
}

pub fn register_repositories(registry: &ServiceRegistry) {
    registry.register::<dyn BillRepository, _>(|_| {
        Ok(Arc::new(InMemoryBillRepository::new()) as Arc<dyn BillRepository>)
    });
    registry.register::<dyn ContainerRepository, _>(|_| {
        Ok(Arc::new(InMemoryContainerRepository::new()) as Arc<dyn ContainerRepository>)
    });
    registry.register::<dyn CuttingTestRepository, _>(|_| {
        Ok(Arc::new(InMemoryCuttingTestRepository::new()) as Arc<dyn CuttingTestRepository>)
    });
}

pub fn register_queries(registry: &ServiceRegistry) {
    registry.register(|r| Ok(Arc::new(BillQuery::new(r.resolve::<dyn BillRepository>()?))));
    registry.register(|r| {
        Ok(Arc::new(ContainerQuery::new(
            r.resolve::<dyn ContainerRepository>()?,
        )))
    });
    registry.register(|r| {
        Ok(Arc::new(CuttingTestQuery::new(
            r.resolve::<dyn CuttingTestRepository>()?,
        )))
    });
}

pub fn register_services(registry: &ServiceRegistry) {
    registry.register(|r| {
        Ok(Arc::new(BillService::new(
            r.resolve::<dyn BillRepository>()?,
            r.resolve::<BillQuery>()?,
        )))
    });
    registry.register(|r| {
        Ok(Arc::new(ContainerService::new(
            r.resolve::<dyn ContainerRepository>()?,
            r.resolve::<ContainerQuery>()?,
            r.resolve::<BillQuery>()?,
        )))
    });
    registry.register(|r| {
        Ok(Arc::new(CuttingTestService::new(
            r.resolve::<dyn CuttingTestRepository>()?,
            r.resolve::<CuttingTestQuery>()?,
            r.resolve::<ContainerQuery>()?,
        )))
    });
}

fn print_summary(registry: &ServiceRegistry) {
    for type_name in registry.registered_types() {
        print_sub_task(&short_type_name(type_name), "registered");
    }
    print_final_summary(registry.len(), registry.materialized_count());
}
