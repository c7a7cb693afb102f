//! # Service Registry - 싱글톤 컴포지션 레지스트리
//!
//! 검수 백엔드의 repository → query → service 계층을 배선하는 싱글톤 컨테이너입니다.
//! 전역 `static` 없이 [`ServiceRegistry`] 값을 컴포지션 루트에서 명시적으로 만들고,
//! 필요한 곳에 참조로 전달합니다.
//!
//! ## 주요 구성 요소
//!
//! ### ServiceRegistry
//! - **타입 키**: `TypeId`를 키로 사용하며 `dyn Trait` 같은 unsized 타입도 등록 가능
//! - **지연 초기화**: `register`는 팩토리를 저장만 하고, 첫 `resolve`에서 생성
//! - **단일 생성 보장**: 생성 중인 타입마다 소유 스레드를 기록하고, 동시 첫 접근은
//!   소유자의 생성이 끝날 때까지 대기한 뒤 같은 인스턴스를 받음
//! - **순환 참조 감지**: 소유/대기 관계(wait-for 그래프)에서 대기가 순환을 닫으면
//!   교착 대신 `CyclicDependency`로 보고 (스레드 내 재진입과 스레드 간 순환 모두)
//! - **무잠금 읽기**: Materialized 엔트리는 `OnceCell::get`으로 생성 잠금 없이 반환
//!
//! ### Resolver
//! - 팩토리에 주입되는 해석 핸들
//! - 팩토리가 의존성에 접근하는 유일한 경로
//!
//! ## 엔트리 상태
//!
//! ```text
//! Unregistered ──register──▶ Registered ──첫 resolve──▶ Materialized
//!                                 ▲                          │
//!                                 └──── clear_instances ─────┘
//! ```
//!
//! 이미 Materialized 상태인 타입을 다시 `register`하면 팩토리만 교체되고
//! 캐시된 인스턴스는 유지됩니다. 새 팩토리는 `clear_instances` 이후에 적용됩니다.
//! 생성 도중의 `register`/`clear_instances`도 진행 중인 생성 결과를 버리지 않으므로
//! 두 번째 인스턴스가 만들어지지 않습니다.
//!
//! ## 사용 예제
//!
//! ```rust
//! use std::sync::Arc;
//! use inspection_service_backend::core::registry::ServiceRegistry;
//!
//! struct BillRepository;
//! struct BillQuery {
//!     repo: Arc<BillRepository>,
//! }
//!
//! let registry = ServiceRegistry::new();
//! registry.register(|_| Ok(Arc::new(BillRepository)));
//! registry.register(|r| Ok(Arc::new(BillQuery { repo: r.resolve::<BillRepository>()? })));
//!
//! let first = registry.resolve::<BillQuery>().unwrap();
//! let second = registry.resolve::<BillQuery>().unwrap();
//! assert!(Arc::ptr_eq(&first, &second));
//! assert!(Arc::ptr_eq(&first.repo, &second.repo));
//! ```

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError, RwLock};
use std::thread::{self, ThreadId};

use log::{debug, info, warn};
use once_cell::sync::OnceCell;

use crate::core::errors::RegistryError;

/// 타입 소거된 싱글톤 인스턴스. 내부에는 항상 `Arc<T>`가 들어 있습니다.
type AnyInstance = Arc<dyn Any + Send + Sync>;

/// 타입 소거된 팩토리
type Factory = Arc<dyn Fn(&Resolver<'_>) -> Result<AnyInstance, RegistryError> + Send + Sync>;

/// 레지스트리 엔트리 (타입 식별자, 팩토리, 캐시된 인스턴스)
struct Registration {
    type_name: &'static str,
    factory: Factory,
    instance: OnceCell<AnyInstance>,
    /// `register_instance`로 등록되어 `clear_instances`에도 유지되는 엔트리
    pinned: bool,
}

impl Registration {
    fn is_materialized(&self) -> bool {
        self.instance.get().is_some()
    }
}

#[derive(Default)]
struct Entries {
    by_type: HashMap<TypeId, Arc<Registration>>,
    /// 최초 등록 순서
    order: Vec<TypeId>,
}

/// 생성 중인 엔트리의 소유 관계 (wait-for 그래프)
///
/// 소유자는 스레드 단위입니다. 팩토리 안에서 어떤 경로로 `resolve`를 호출하든
/// 같은 스레드가 생성 중인 타입으로 돌아오면 순환입니다.
#[derive(Default)]
struct Construction {
    /// 생성 중인 타입 → 소유 스레드
    in_flight: HashMap<TypeId, ThreadId>,
    /// 스레드별 생성 스택 (바깥 → 안쪽)
    stacks: HashMap<ThreadId, Vec<(TypeId, &'static str)>>,
    /// 다른 스레드의 생성 완료를 기다리는 스레드 → 대상 타입
    waiting: HashMap<ThreadId, TypeId>,
}

impl Construction {
    fn claim(&mut self, owner: ThreadId, type_id: TypeId, type_name: &'static str) {
        self.in_flight.insert(type_id, owner);
        self.stacks.entry(owner).or_default().push((type_id, type_name));
    }

    fn release(&mut self, owner: ThreadId, type_id: TypeId) {
        self.in_flight.remove(&type_id);
        if let Some(stack) = self.stacks.get_mut(&owner) {
            if let Some(pos) = stack.iter().rposition(|(id, _)| *id == type_id) {
                stack.remove(pos);
            }
            if stack.is_empty() {
                self.stacks.remove(&owner);
            }
        }
    }

    fn name_of(&self, type_id: TypeId) -> Option<&'static str> {
        let owner = self.in_flight.get(&type_id)?;
        self.stacks
            .get(owner)?
            .iter()
            .find(|(id, _)| *id == type_id)
            .map(|(_, name)| *name)
    }

    /// `me`가 `target`을 기다리면 순환이 닫히는지 확인하고, 닫히면 순환 경로를 반환합니다.
    ///
    /// `target`의 소유 스레드 → 그 스레드가 기다리는 타입 → 그 타입의 소유 스레드 …
    /// 를 따라가다 `me`에 도달하면 순환입니다.
    fn find_cycle(
        &self,
        me: ThreadId,
        target: TypeId,
        target_name: &'static str,
    ) -> Option<Vec<&'static str>> {
        let mut path: Vec<&'static str> = self
            .stacks
            .get(&me)
            .map(|stack| stack.iter().map(|(_, name)| *name).collect())
            .unwrap_or_default();
        path.push(target_name);

        let mut current = target;
        for _ in 0..=self.in_flight.len() {
            let owner = *self.in_flight.get(&current)?;
            if owner == me {
                return Some(path);
            }

            let stack = self.stacks.get(&owner)?;
            let start = stack.iter().position(|(id, _)| *id == current)?;
            path.extend(stack[start + 1..].iter().map(|(_, name)| *name));

            let next = *self.waiting.get(&owner)?;
            path.push(self.name_of(next)?);
            current = next;
        }

        None
    }
}

/// 싱글톤 컴포지션 레지스트리
///
/// 등록된 타입마다 정확히 하나의 `Arc<T>` 인스턴스를 지연 생성하여 캐시합니다.
/// `Send + Sync`이므로 `Arc<ServiceRegistry>`로 여러 스레드에서 공유할 수 있습니다.
pub struct ServiceRegistry {
    entries: RwLock<Entries>,
    construction: Mutex<Construction>,
    /// 생성이 끝날 때마다 대기 중인 스레드를 깨움
    finished: Condvar,
}

impl ServiceRegistry {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(Entries::default()),
            construction: Mutex::new(Construction::default()),
            finished: Condvar::new(),
        }
    }

    /// 타입 `T`의 팩토리를 등록합니다.
    ///
    /// 팩토리는 즉시 호출되지 않습니다. 같은 타입을 다시 등록하면 팩토리가 교체되며
    /// (last write wins), 이미 생성된 인스턴스가 있다면 그대로 유지됩니다.
    /// 다른 스레드가 이전 팩토리로 생성 중이라면 그 결과가 새 엔트리에 캐시됩니다.
    ///
    /// `T`는 `dyn BillRepository`처럼 트레이트 객체일 수 있습니다.
    pub fn register<T, F>(&self, factory: F)
    where
        T: ?Sized + Send + Sync + 'static,
        F: Fn(&Resolver<'_>) -> Result<Arc<T>, RegistryError> + Send + Sync + 'static,
    {
        let factory: Factory = Arc::new(move |resolver: &Resolver<'_>| -> Result<AnyInstance, RegistryError> {
            let instance = factory(resolver)?;
            Ok(Arc::new(instance) as AnyInstance)
        });

        self.insert(TypeId::of::<T>(), std::any::type_name::<T>(), factory, None);
    }

    /// 외부에서 생성된 인스턴스를 Materialized 상태로 직접 등록합니다.
    ///
    /// 설정 객체나 인프라 핸들처럼 컴포지션 루트 밖에서 만들어진 값에 사용합니다.
    pub fn register_instance<T>(&self, instance: Arc<T>)
    where
        T: ?Sized + Send + Sync + 'static,
    {
        let instance: AnyInstance = Arc::new(instance);
        let cached = instance.clone();
        let factory: Factory =
            Arc::new(move |_: &Resolver<'_>| -> Result<AnyInstance, RegistryError> { Ok(cached.clone()) });

        self.insert(
            TypeId::of::<T>(),
            std::any::type_name::<T>(),
            factory,
            Some(instance),
        );
    }

    fn insert(
        &self,
        type_id: TypeId,
        type_name: &'static str,
        factory: Factory,
        instance: Option<AnyInstance>,
    ) {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        let pinned = instance.is_some();

        // 이미 생성된 인스턴스는 새 팩토리로 교체되어도 유지
        let previous = entries
            .by_type
            .get(&type_id)
            .map(|registration| registration.instance.get().cloned());

        let carried = match previous {
            Some(kept) => {
                if kept.is_some() && !pinned {
                    warn!(
                        "Re-registering materialized type {}; cached instance is kept until clear_instances",
                        short_type_name(type_name)
                    );
                } else {
                    debug!("Replacing factory for {}", short_type_name(type_name));
                }
                instance.or(kept)
            }
            None => {
                entries.order.push(type_id);
                debug!("Registering: {}", short_type_name(type_name));
                instance
            }
        };

        let cell = match carried {
            Some(value) => OnceCell::with_value(value),
            None => OnceCell::new(),
        };

        entries.by_type.insert(
            type_id,
            Arc::new(Registration {
                type_name,
                factory,
                instance: cell,
                pinned,
            }),
        );
    }

    /// 타입 `T`의 싱글톤 인스턴스를 가져옵니다.
    ///
    /// 첫 호출에서 팩토리를 실행하여 결과를 캐시하고, 이후 호출은 같은 `Arc`를 반환합니다.
    ///
    /// # Errors
    ///
    /// - `UnregisteredType`: `T`가 등록되지 않음
    /// - `CyclicDependency`: 팩토리 그래프에 순환이 있음 (여러 스레드에 걸친 순환 포함)
    pub fn resolve<T>(&self) -> Result<Arc<T>, RegistryError>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        Resolver::root(self).resolve::<T>()
    }

    fn lookup(
        &self,
        type_id: TypeId,
        type_name: &'static str,
    ) -> Result<Arc<Registration>, RegistryError> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries
            .by_type
            .get(&type_id)
            .cloned()
            .ok_or_else(|| RegistryError::unregistered(type_name))
    }

    fn lock_construction(&self) -> MutexGuard<'_, Construction> {
        self.construction.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn resolve_erased(
        &self,
        type_id: TypeId,
        type_name: &'static str,
        depth: usize,
    ) -> Result<AnyInstance, RegistryError> {
        // Materialized 엔트리는 생성 잠금 없이 반환
        if let Some(instance) = self.lookup(type_id, type_name)?.instance.get() {
            return Ok(instance.clone());
        }

        let me = thread::current().id();
        let mut construction = self.lock_construction();

        loop {
            // 대기 중 재등록되었을 수 있으므로 잠금 안에서 다시 조회
            let registration = self.lookup(type_id, type_name)?;
            if let Some(instance) = registration.instance.get() {
                return Ok(instance.clone());
            }

            if !construction.in_flight.contains_key(&type_id) {
                construction.claim(me, type_id, registration.type_name);
                drop(construction);
                return self.construct(registration, type_id, me, depth);
            }

            if let Some(path) = construction.find_cycle(me, type_id, type_name) {
                let names: Vec<String> = path.iter().map(|name| short_type_name(name)).collect();
                let (reentered, chain) = match names.split_last() {
                    Some((last, rest)) => (last.as_str(), rest),
                    None => ("", &names[..]),
                };
                let chain: Vec<&str> = chain.iter().map(String::as_str).collect();
                return Err(RegistryError::cycle(&chain, reentered));
            }

            construction.waiting.insert(me, type_id);
            construction = self
                .finished
                .wait(construction)
                .unwrap_or_else(PoisonError::into_inner);
            construction.waiting.remove(&me);
        }
    }

    /// 소유권을 얻은 엔트리를 팩토리로 생성하여 현재 엔트리에 캐시합니다.
    fn construct(
        &self,
        registration: Arc<Registration>,
        type_id: TypeId,
        owner: ThreadId,
        depth: usize,
    ) -> Result<AnyInstance, RegistryError> {
        // 실패나 패닉에서도 소유권을 반납
        let _claim = Claim {
            registry: self,
            owner,
            type_id,
        };

        let child = Resolver {
            registry: self,
            depth: depth + 1,
        };
        debug!("Materializing: {}", short_type_name(registration.type_name));
        let built = (registration.factory)(&child)?;

        // 생성 중 재등록되었다면 교체된 엔트리에 저장
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        let stored = match entries.by_type.get(&type_id) {
            Some(current) => current.instance.get_or_init(|| built).clone(),
            None => built,
        };

        Ok(stored)
    }

    /// 타입 `T`가 등록되어 있는지 확인합니다.
    pub fn contains<T>(&self) -> bool
    where
        T: ?Sized + 'static,
    {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries.by_type.contains_key(&TypeId::of::<T>())
    }

    /// 타입 `T`의 인스턴스가 이미 생성되었는지 확인합니다.
    pub fn is_materialized<T>(&self) -> bool
    where
        T: ?Sized + 'static,
    {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries
            .by_type
            .get(&TypeId::of::<T>())
            .is_some_and(|registration| registration.is_materialized())
    }

    pub fn len(&self) -> usize {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 등록 순서대로 타입 이름을 반환합니다.
    pub fn registered_types(&self) -> Vec<&'static str> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries
            .order
            .iter()
            .filter_map(|id| entries.by_type.get(id))
            .map(|registration| registration.type_name)
            .collect()
    }

    pub fn materialized_count(&self) -> usize {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries
            .by_type
            .values()
            .filter(|registration| registration.is_materialized())
            .count()
    }

    /// 등록된 모든 엔트리를 등록 순서대로 미리 생성합니다.
    ///
    /// 시작 시점에 배선 결함을 드러내기 위한 워밍업입니다.
    /// 첫 번째 실패에서 중단하고 해당 에러를 반환합니다.
    pub fn initialize_all(&self) -> Result<usize, RegistryError> {
        let snapshot: Vec<(TypeId, &'static str)> = {
            let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
            entries
                .order
                .iter()
                .filter_map(|id| entries.by_type.get(id).map(|r| (*id, r.type_name)))
                .collect()
        };

        for &(type_id, type_name) in &snapshot {
            self.resolve_erased(type_id, type_name, 0)?;
            debug!("Initialized: {}", short_type_name(type_name));
        }

        info!("Service registry initialized: {} components", snapshot.len());
        Ok(snapshot.len())
    }

    /// 팩토리로 생성된 모든 캐시 인스턴스를 버리고 Registered 상태로 되돌립니다.
    ///
    /// `register_instance`로 등록된 엔트리는 유지됩니다. 생성 중인 엔트리는 아직
    /// Materialized가 아니므로 건드리지 않으며, 그 결과는 생성이 끝나면 그대로 캐시됩니다.
    pub fn clear_instances(&self) {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        let mut cleared = 0usize;

        for registration in entries.by_type.values_mut() {
            if registration.pinned || !registration.is_materialized() {
                continue;
            }

            *registration = Arc::new(Registration {
                type_name: registration.type_name,
                factory: registration.factory.clone(),
                instance: OnceCell::new(),
                pinned: false,
            });
            cleared += 1;
        }

        info!("Cleared {} cached instances", cleared);
    }
}

impl Default for ServiceRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ServiceRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceRegistry")
            .field("registered", &self.len())
            .field("materialized", &self.materialized_count())
            .finish()
    }
}

/// 생성 소유권. 드롭될 때 반납하고 대기 중인 스레드를 깨웁니다.
struct Claim<'a> {
    registry: &'a ServiceRegistry,
    owner: ThreadId,
    type_id: TypeId,
}

impl Drop for Claim<'_> {
    fn drop(&mut self) {
        let mut construction = self.registry.lock_construction();
        construction.release(self.owner, self.type_id);
        drop(construction);
        self.registry.finished.notify_all();
    }
}

/// 팩토리에 주입되는 해석 핸들
///
/// 팩토리 안에서의 `resolve`가 생성 중인 타입으로 되돌아오면
/// 교착 대신 `CyclicDependency`로 실패합니다.
pub struct Resolver<'a> {
    registry: &'a ServiceRegistry,
    depth: usize,
}

impl<'a> Resolver<'a> {
    fn root(registry: &'a ServiceRegistry) -> Self {
        Self { registry, depth: 0 }
    }

    /// 의존성 타입 `T`를 해석합니다.
    pub fn resolve<T>(&self) -> Result<Arc<T>, RegistryError>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        let type_name = std::any::type_name::<T>();
        let instance = self
            .registry
            .resolve_erased(TypeId::of::<T>(), type_name, self.depth)?;

        instance
            .downcast_ref::<Arc<T>>()
            .cloned()
            .ok_or(RegistryError::TypeMismatch { type_name })
    }

    /// 현재 해석 깊이 (루트 호출은 0)
    pub fn depth(&self) -> usize {
        self.depth
    }
}

/// 타입 이름에서 모듈 경로를 제거합니다.
///
/// `std::any::type_name`은 전체 경로를 포함하므로
/// (예: `dyn inspection_service_backend::repositories::bills::BillRepository`)
/// 로그와 에러 메시지에는 `dyn BillRepository` 형태로 줄여서 사용합니다.
pub fn short_type_name(type_name: &str) -> String {
    let segments: Vec<&str> = type_name.split("::").collect();
    let last = segments.len().saturating_sub(1);
    let mut short = String::with_capacity(type_name.len());

    for (index, segment) in segments.iter().enumerate() {
        if index == last {
            short.push_str(segment);
        } else {
            // 다음 세그먼트로 이어지는 모듈 이름은 버리고 앞쪽 구두점만 유지
            let module_start = segment
                .rfind(|c: char| !(c.is_alphanumeric() || c == '_'))
                .map_or(0, |pos| pos + 1);
            short.push_str(&segment[..module_start]);
        }
    }

    short
}
