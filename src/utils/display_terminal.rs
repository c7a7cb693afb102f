//! 터미널 출력 포맷팅 유틸리티
//!
//! 레지스트리 초기화 과정에서 사용되는 터미널 출력 함수들을 제공합니다.
//! 박스 형태의 제목, 진행 단계 표시, 완료 요약을 출력합니다.

const BOX_WIDTH: usize = 50;

/// 고정 너비 박스 제목 (내부 49칸 중앙 정렬)
pub fn boxed_title(title: &str) -> String {
    let border = "═".repeat(BOX_WIDTH);
    format!("╔{}╗\n║{:^49}║\n╚{}╝", border, title, border)
}

pub fn print_boxed_title(title: &str) {
    println!("{}", boxed_title(title));
}

pub fn print_step_start(step: u8, description: &str) {
    println!("→ Step {}: {}", step, description);
}

pub fn print_step_complete(step: u8, description: &str, count: usize) {
    println!("✓ Step {}: {} ({} items)", step, description, count);
}

pub fn print_sub_task(name: &str, status: &str) {
    println!("   ├─ {}: {}", name, status);
}

pub fn print_final_summary(registered: usize, materialized: usize) {
    println!();
    print_boxed_title("🎉 SERVICE REGISTRY READY");
    println!("   📦 Registered: {}", registered);
    println!("   🔧 Materialized: {}", materialized);
    println!("   💤 Lazy: {}", registered.saturating_sub(materialized));
    println!();
}
