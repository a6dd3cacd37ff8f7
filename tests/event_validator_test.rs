// ==========================================
// EventValidator 集成测试
// ==========================================
// 测试目标: 拖缆/分段边界校验 (1-based, 工作段+尾段连续编号)
// ==========================================

mod helpers;

use helpers::test_data_builder::{standard_topology, ProjectBuilder};
use streamer_maintenance::engine::EventValidator;

#[test]
fn test_standard_topology_bounds() {
    let defaults = standard_topology();
    let validator = EventValidator::new(&defaults, &[]);

    let ok = validator.validate(12, 1, 112, None);
    assert!(ok.valid);
    assert_eq!((ok.max_streamer, ok.max_section), (12, 112));

    for (streamer, start, end) in [(13, 1, 1), (1, 0, 1), (1, 1, 113)] {
        let result = validator.validate(streamer, start, end, None);
        assert!(!result.valid);
        assert_eq!(result.max_streamer, 12);
        assert_eq!(result.max_section, 112);
        assert!(result.message.is_some());
    }
}

#[test]
fn test_failure_is_all_or_nothing() {
    let defaults = standard_topology();
    let validator = EventValidator::new(&defaults, &[]);
    // 拖缆有效, 仅终点越界 → 整体无效
    let result = validator.validate(5, 10, 200, None);
    assert!(!result.valid);
    // 单条消息同时说明两个有效范围
    let message = result.message.unwrap();
    assert!(message.contains("1-12"));
    assert!(message.contains("1-112"));
}

#[test]
fn test_project_overrides_change_bounds() {
    let defaults = standard_topology();
    let projects = vec![
        ProjectBuilder::new("P-ROPE").rope_tail(true).build(),
        ProjectBuilder::new("P-SMALL").streamers(6).sections(80).build(),
    ];
    let validator = EventValidator::new(&defaults, &projects);

    let rope = validator.validate(1, 1, 107, Some("P-ROPE"));
    assert!(rope.valid);
    assert_eq!(rope.max_section, 107);
    assert!(!validator.validate(1, 108, 108, Some("P-ROPE")).valid);

    let small = validator.validate(7, 1, 1, Some("P-SMALL"));
    assert!(!small.valid);
    assert_eq!(small.max_streamer, 6);
    assert_eq!(small.max_section, 85);
}

#[test]
fn test_unknown_project_validates_against_defaults() {
    let defaults = standard_topology();
    let validator = EventValidator::new(&defaults, &[]);
    let result = validator.validate(12, 1, 112, Some("NOPE"));
    assert!(result.valid);
    assert_eq!(result.max_section, 112);
}

#[test]
fn test_reversed_bounds_are_not_reordered_but_still_valid() {
    let defaults = standard_topology();
    let validator = EventValidator::new(&defaults, &[]);
    assert!(validator.validate(2, 50, 3, None).valid);
    assert!(!validator.validate(2, 113, 3, None).valid);
}

#[test]
fn test_oversized_section_override_returns_result() {
    let defaults = standard_topology();
    let projects = vec![ProjectBuilder::new("BIG").sections(u32::MAX).build()];
    let validator = EventValidator::new(&defaults, &projects);

    let result = validator.validate(1, 1, 1, Some("BIG"));
    assert!(result.valid);
    assert_eq!(result.max_section, u32::MAX);

    let out_of_range = validator.validate(1, 1, i64::from(u32::MAX) + 1, Some("BIG"));
    assert!(!out_of_range.valid);
}
