// ==========================================
// 拖缆清洁维护系统 - 覆盖聚合
// ==========================================
// 职责: 清洁事件 → 每缆每段最近清洁时间
// 输入: 事件快照 + 有效拓扑 + 过滤条件
// 输出: streamer_id → [Option<清洁时间>; total_sections]
// 规则: 每个槽位取所有命中事件中的最晚时间, 较早事件不会回退槽位
// ==========================================

use crate::domain::cleaning_event::CleaningEvent;
use crate::domain::topology::Topology;
use crate::domain::types::SectionType;
use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::instrument;

/// 每缆每槽位的最近清洁时间; 槽位顺序: 工作段在前, 尾段在后
pub type LastCleanedMap = BTreeMap<u32, Vec<Option<DateTime<Utc>>>>;

// ==========================================
// ProjectScope - 项目作用域过滤
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind", content = "projectNumber")]
pub enum ProjectScope {
    /// 不按项目过滤 (所有事件)
    #[default]
    All,
    /// 仅全局事件 (project_number 为空)
    GlobalOnly,
    /// 仅指定项目的事件, 全局事件不计入
    Project(String),
    /// 指定项目可见的事件: 该项目事件 + 全局事件
    VisibleTo(String),
}

impl ProjectScope {
    pub fn matches(&self, event: &CleaningEvent) -> bool {
        match self {
            ProjectScope::All => true,
            ProjectScope::GlobalOnly => event.project_number.is_none(),
            ProjectScope::Project(pn) => event.project_number.as_deref() == Some(pn.as_str()),
            ProjectScope::VisibleTo(pn) => match event.project_number.as_deref() {
                None => true,
                Some(own) => own == pn,
            },
        }
    }

    /// 作用域对应的项目编号 (用于解析拓扑)
    pub fn project_number(&self) -> Option<&str> {
        match self {
            ProjectScope::Project(pn) | ProjectScope::VisibleTo(pn) => Some(pn.as_str()),
            ProjectScope::All | ProjectScope::GlobalOnly => None,
        }
    }
}

// ==========================================
// DateRange - 时间范围 (闭区间, 缺失边界视为无界)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DateRange {
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}

impl DateRange {
    pub fn new(start: Option<DateTime<Utc>>, end: Option<DateTime<Utc>>) -> Self {
        Self { start, end }
    }

    /// 按自然日构造: start 日 00:00 至 end 日最后一刻
    pub fn from_days(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        let start = start.and_then(|d| d.and_hms_opt(0, 0, 0)).map(|t| t.and_utc());
        let end = end
            .and_then(|d| d.succ_opt())
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|t| t.and_utc() - Duration::nanoseconds(1));
        Self { start, end }
    }

    pub fn contains(&self, at: &DateTime<Utc>) -> bool {
        self.start.map_or(true, |s| *at >= s) && self.end.map_or(true, |e| *at <= e)
    }
}

// ==========================================
// EventFilter - 事件过滤条件
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EventFilter {
    #[serde(default)]
    pub scope: ProjectScope,
    #[serde(default)]
    pub date_range: Option<DateRange>,
}

impl EventFilter {
    /// 不过滤
    pub fn all() -> Self {
        Self::default()
    }

    /// 仅指定项目
    pub fn project(project_number: impl Into<String>) -> Self {
        Self {
            scope: ProjectScope::Project(project_number.into()),
            date_range: None,
        }
    }

    pub fn with_scope(mut self, scope: ProjectScope) -> Self {
        self.scope = scope;
        self
    }

    pub fn with_date_range(mut self, date_range: DateRange) -> Self {
        self.date_range = Some(date_range);
        self
    }

    pub fn matches(&self, event: &CleaningEvent) -> bool {
        self.scope.matches(event)
            && self
                .date_range
                .map_or(true, |range| range.contains(&event.cleaned_at))
    }
}

// ==========================================
// CoverageAggregator - 覆盖聚合器
// ==========================================
pub struct CoverageAggregator;

impl CoverageAggregator {
    /// 过滤事件
    pub fn matching<'a>(
        events: &'a [CleaningEvent],
        filter: &'a EventFilter,
    ) -> impl Iterator<Item = &'a CleaningEvent> + 'a {
        events.iter().filter(move |ev| filter.matches(ev))
    }

    /// 计算最近清洁时间表
    ///
    /// # 规则
    /// - 每缆 (1..=num_streamers) 一行, 长度 total_sections, 初始全部为 None
    /// - 事件范围按分段类型落入对应分区, 超出分区的索引忽略
    /// - start > end 的事件不覆盖任何槽位
    /// - 拖缆编号超出拓扑的事件不占槽位
    #[instrument(skip(events, topology, filter), fields(events = events.len()))]
    pub fn last_cleaned_map(
        events: &[CleaningEvent],
        topology: &Topology,
        filter: &EventFilter,
    ) -> LastCleanedMap {
        let slots = topology.total_sections() as usize;
        let mut map: LastCleanedMap = (1..=topology.num_streamers)
            .map(|id| (id, vec![None; slots]))
            .collect();

        for event in Self::matching(events, filter) {
            let Some(row) = map.get_mut(&event.streamer_id) else {
                tracing::debug!(
                    event_id = %event.id,
                    streamer_id = event.streamer_id,
                    "拖缆编号超出拓扑范围，忽略"
                );
                continue;
            };

            let (start, end) = event.partition_range(topology);
            let partition_len = topology.partition_len(event.section_type);
            if start > end || start >= partition_len {
                continue;
            }

            for index in start..=end.min(partition_len - 1) {
                if let Some(slot) = topology.slot_index(event.section_type, index) {
                    let cell = &mut row[slot];
                    if cell.map_or(true, |current| event.cleaned_at > current) {
                        *cell = Some(event.cleaned_at);
                    }
                }
            }
        }

        map
    }

    /// 每缆已清洁段数 (工作段, 尾段)
    pub fn cleaned_per_streamer(
        map: &LastCleanedMap,
        topology: &Topology,
    ) -> BTreeMap<u32, (usize, usize)> {
        map.iter()
            .map(|(&streamer_id, row)| {
                let counts = Self::partition_counts(row, topology);
                (streamer_id, counts)
            })
            .collect()
    }

    /// 单行中已清洁的 (工作段, 尾段) 数量
    pub(crate) fn partition_counts(
        row: &[Option<DateTime<Utc>>],
        topology: &Topology,
    ) -> (usize, usize) {
        row.iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_some())
            .fold((0, 0), |(active, tail), (slot, _)| {
                match topology.partition_of_slot(slot) {
                    Some((SectionType::Active, _)) => (active + 1, tail),
                    Some((SectionType::Tail, _)) => (active, tail + 1),
                    None => (active, tail),
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::CleaningMethod;
    use chrono::TimeZone;

    fn topology() -> Topology {
        Topology {
            num_streamers: 4,
            sections_per_streamer: 20,
            section_length_meters: 75,
            module_frequency: 4,
            channels_per_section: 6,
            use_rope_for_tail: false,
        }
    }

    fn day(d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, d, 12, 0, 0).unwrap()
    }

    fn active(streamer: u32, start: u32, end: u32, at: DateTime<Utc>) -> CleaningEvent {
        CleaningEvent::new(streamer, SectionType::Active, start, end, CleaningMethod::Rope, at)
    }

    #[test]
    fn test_latest_wins_per_slot() {
        let events = vec![active(1, 3, 8, day(5)), active(1, 0, 5, day(2))];
        let map = CoverageAggregator::last_cleaned_map(&events, &topology(), &EventFilter::all());
        let row = &map[&1];

        for slot in 0..=2 {
            assert_eq!(row[slot], Some(day(2)), "slot {slot}");
        }
        for slot in 3..=8 {
            assert_eq!(row[slot], Some(day(5)), "slot {slot}");
        }
        assert_eq!(row[9], None);
        assert_eq!(row.len(), 25);
    }

    #[test]
    fn test_every_streamer_has_a_row() {
        let map = CoverageAggregator::last_cleaned_map(&[], &topology(), &EventFilter::all());
        assert_eq!(map.keys().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
        assert!(map.values().all(|row| row.iter().all(Option::is_none)));
    }

    #[test]
    fn test_tail_events_land_after_active_slots() {
        let events = vec![CleaningEvent::new(
            2,
            SectionType::Tail,
            1,
            2,
            CleaningMethod::Knife,
            day(3),
        )];
        let map = CoverageAggregator::last_cleaned_map(&events, &topology(), &EventFilter::all());
        let row = &map[&2];
        assert_eq!(row[20], None);
        assert_eq!(row[21], Some(day(3)));
        assert_eq!(row[22], Some(day(3)));
        assert_eq!(row[1], None);
    }

    #[test]
    fn test_active_event_is_clipped_to_active_partition() {
        let events = vec![active(1, 18, 23, day(3))];
        let map = CoverageAggregator::last_cleaned_map(&events, &topology(), &EventFilter::all());
        let row = &map[&1];
        assert_eq!(row[19], Some(day(3)));
        assert!(row[20..].iter().all(Option::is_none));
    }

    #[test]
    fn test_reversed_range_and_unknown_streamer_cover_nothing() {
        let events = vec![active(1, 8, 3, day(3)), active(9, 0, 3, day(3))];
        let map = CoverageAggregator::last_cleaned_map(&events, &topology(), &EventFilter::all());
        assert!(map.values().all(|row| row.iter().all(Option::is_none)));
    }

    #[test]
    fn test_project_scopes() {
        let global = active(1, 0, 0, day(1));
        let p1 = active(1, 1, 1, day(1)).in_project("P1");
        let p2 = active(1, 2, 2, day(1)).in_project("P2");

        assert!(ProjectScope::All.matches(&global) && ProjectScope::All.matches(&p1));
        assert!(ProjectScope::GlobalOnly.matches(&global));
        assert!(!ProjectScope::GlobalOnly.matches(&p1));

        let only_p1 = ProjectScope::Project("P1".into());
        assert!(only_p1.matches(&p1));
        assert!(!only_p1.matches(&global));
        assert!(!only_p1.matches(&p2));

        let visible_p1 = ProjectScope::VisibleTo("P1".into());
        assert!(visible_p1.matches(&p1));
        assert!(visible_p1.matches(&global));
        assert!(!visible_p1.matches(&p2));
    }

    #[test]
    fn test_project_scope_serializes_camel_case() {
        let json = serde_json::to_value(ProjectScope::VisibleTo("P1".into())).unwrap();
        assert_eq!(json, serde_json::json!({ "kind": "visibleTo", "projectNumber": "P1" }));

        let parsed: ProjectScope = serde_json::from_str(r#"{ "kind": "globalOnly" }"#).unwrap();
        assert_eq!(parsed, ProjectScope::GlobalOnly);
    }

    #[test]
    fn test_date_range_is_inclusive_and_open_ended() {
        let range = DateRange::new(Some(day(2)), Some(day(4)));
        assert!(range.contains(&day(2)));
        assert!(range.contains(&day(4)));
        assert!(!range.contains(&day(5)));

        let open = DateRange::new(None, Some(day(4)));
        assert!(open.contains(&day(1)));
    }

    #[test]
    fn test_date_range_from_days_covers_whole_end_day() {
        let range = DateRange::from_days(
            NaiveDate::from_ymd_opt(2026, 3, 2),
            NaiveDate::from_ymd_opt(2026, 3, 4),
        );
        assert!(range.contains(&Utc.with_ymd_and_hms(2026, 3, 4, 23, 59, 59).unwrap()));
        assert!(!range.contains(&Utc.with_ymd_and_hms(2026, 3, 5, 0, 0, 0).unwrap()));
        assert!(range.contains(&Utc.with_ymd_and_hms(2026, 3, 2, 0, 0, 0).unwrap()));
        assert!(!range.contains(&Utc.with_ymd_and_hms(2026, 3, 1, 23, 59, 59).unwrap()));
    }

    #[test]
    fn test_cleaned_per_streamer() {
        let events = vec![
            active(1, 0, 4, day(1)),
            CleaningEvent::new(1, SectionType::Tail, 0, 4, CleaningMethod::Scue, day(1)),
        ];
        let t = topology();
        let map = CoverageAggregator::last_cleaned_map(&events, &t, &EventFilter::all());
        let counts = CoverageAggregator::cleaned_per_streamer(&map, &t);
        assert_eq!(counts[&1], (5, 5));
        assert_eq!(counts[&2], (0, 0));
    }
}
