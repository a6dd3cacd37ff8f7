// ==========================================
// 拖缆清洁维护系统 - 维护 API
// ==========================================
// 职责: 以请求快照调用四个引擎, 组装对外值对象
// 红线: 不持有快照; 每次调用使用调用方传入的完整快照
// ==========================================

use crate::api::dto::{CoverageSummary, EventDraft, EventRow, SectionRow};
use crate::api::error::{ApiError, ApiResult};
use crate::domain::cleaning_event::{CleaningEvent, SectionSpan};
use crate::domain::snapshot::Snapshot;
use crate::domain::topology::Topology;
use crate::domain::types::SectionType;
use crate::engine::module_locator::NOT_APPLICABLE;
use crate::engine::{
    CleaningStats, CoverageAggregator, EventFilter, EventValidator, LastCleanedMap,
    ModuleLocator, RecencyClassifier, SectionAddressing, StatsEngine, TopologyResolver,
    ValidationResult,
};
use chrono::{DateTime, Utc};
use tracing::instrument;

// ==========================================
// MaintenanceApi
// ==========================================
pub struct MaintenanceApi {
    global_defaults: Topology,
}

impl MaintenanceApi {
    pub fn new(global_defaults: Topology) -> Self {
        Self { global_defaults }
    }

    pub fn global_defaults(&self) -> &Topology {
        &self.global_defaults
    }

    /// 解析项目有效拓扑
    pub fn topology(&self, snapshot: &Snapshot, project_number: Option<&str>) -> Topology {
        TopologyResolver::resolve(&self.global_defaults, &snapshot.projects, project_number)
    }

    /// 过滤条件对应的拓扑 (按作用域中的项目解析)
    fn topology_for_filter(&self, snapshot: &Snapshot, filter: &EventFilter) -> Topology {
        self.topology(snapshot, filter.scope.project_number())
    }

    /// 最近清洁时间表
    pub fn last_cleaned(&self, snapshot: &Snapshot, filter: &EventFilter) -> LastCleanedMap {
        let topology = self.topology_for_filter(snapshot, filter);
        CoverageAggregator::last_cleaned_map(&snapshot.events, &topology, filter)
    }

    /// 汇总统计
    pub fn stats(&self, snapshot: &Snapshot, filter: &EventFilter) -> CleaningStats {
        let topology = self.topology_for_filter(snapshot, filter);
        StatsEngine::compute_stats(&snapshot.events, &topology, filter)
    }

    /// 覆盖汇总 (含覆盖率与时效分档计数)
    #[instrument(skip(self, snapshot, filter))]
    pub fn coverage_summary(
        &self,
        snapshot: &Snapshot,
        filter: &EventFilter,
        reference: DateTime<Utc>,
    ) -> CoverageSummary {
        let topology = self.topology_for_filter(snapshot, filter);
        let stats = StatsEngine::compute_stats(&snapshot.events, &topology, filter);
        let map = CoverageAggregator::last_cleaned_map(&snapshot.events, &topology, filter);

        let streamers = topology.num_streamers as usize;
        let total_active_sections = streamers * topology.sections_per_streamer as usize;
        let total_tail_sections = streamers * topology.tail_section_count() as usize;
        let total_available_sections = total_active_sections + total_tail_sections;

        CoverageSummary {
            coverage_ratio: ratio(stats.unique_cleaned_sections, total_available_sections),
            active_coverage_ratio: ratio(stats.active_cleaned_sections, total_active_sections),
            tail_coverage_ratio: ratio(stats.tail_cleaned_sections, total_tail_sections),
            bucket_counts: RecencyClassifier::bucket_counts(&map, reference),
            stats,
            total_available_sections,
            total_active_sections,
            total_tail_sections,
        }
    }

    /// 单缆分段概览
    ///
    /// # 返回
    /// 每个槽位一行 (工作段在前, 尾段在后)
    pub fn section_overview(
        &self,
        snapshot: &Snapshot,
        streamer_id: u32,
        filter: &EventFilter,
        reference: DateTime<Utc>,
    ) -> ApiResult<Vec<SectionRow>> {
        let topology = self.topology_for_filter(snapshot, filter);
        if !topology.contains_streamer(streamer_id) {
            return Err(ApiError::NotFound(format!(
                "拖缆 {} 不存在 (共 {} 条)",
                streamer_id, topology.num_streamers
            )));
        }

        let map = CoverageAggregator::last_cleaned_map(&snapshot.events, &topology, filter);
        let row = map
            .get(&streamer_id)
            .ok_or_else(|| ApiError::NotFound(format!("拖缆 {} 不存在", streamer_id)))?;

        let rows = row
            .iter()
            .enumerate()
            .filter_map(|(slot, last_cleaned)| {
                let (section_type, index) = topology.partition_of_slot(slot)?;
                let eb_range = match section_type {
                    SectionType::Active => ModuleLocator::eb_range(index, index, &topology),
                    SectionType::Tail => NOT_APPLICABLE.to_string(),
                };
                let days = last_cleaned.map(|at| RecencyClassifier::days_since(reference, at));
                Some(SectionRow {
                    slot,
                    section_type,
                    index,
                    label: SectionAddressing::section_label(index, section_type),
                    eb_range,
                    channel_range: SectionAddressing::channel_range_for(
                        index,
                        section_type,
                        &topology,
                    ),
                    last_cleaned: *last_cleaned,
                    days_since_cleaned: days,
                    age_bucket: RecencyClassifier::age_bucket(days),
                })
            })
            .collect();

        Ok(rows)
    }

    /// 事件历史 (按清洁时间倒序, 同时间按ID排序)
    ///
    /// 每个事件按其所属项目的拓扑解析标签与距离, 与过滤条件无关
    pub fn event_rows(&self, snapshot: &Snapshot, filter: &EventFilter) -> Vec<EventRow> {
        let mut rows: Vec<EventRow> = CoverageAggregator::matching(&snapshot.events, filter)
            .map(|event| {
                let topology = self.topology(snapshot, event.project_number.as_deref());
                let section_length = u64::from(topology.section_length_meters);
                let normalized = event.normalized(&topology);
                let first = SectionAddressing::section_label(
                    normalized.section_index_start,
                    normalized.section_type,
                );
                let last = SectionAddressing::section_label(
                    normalized.section_index_end,
                    normalized.section_type,
                );
                let section_range = if first == last {
                    first
                } else {
                    format!("{} - {}", first, last)
                };

                EventRow {
                    id: event.id.clone(),
                    streamer_id: event.streamer_id,
                    section_type: event.section_type,
                    section_range,
                    eb_range: ModuleLocator::eb_range_for_event(&normalized, &topology),
                    cleaning_method: event.cleaning_method,
                    cleaned_at: event.cleaned_at,
                    distance: event.section_count() * section_length,
                    project_number: event.project_number.clone(),
                }
            })
            .collect();

        rows.sort_by(|a, b| b.cleaned_at.cmp(&a.cleaned_at).then_with(|| a.id.cmp(&b.id)));
        rows
    }

    /// 校验候选事件 (1-based)
    pub fn validate(
        &self,
        snapshot: &Snapshot,
        streamer_id: i64,
        start_section: i64,
        end_section: i64,
        project_number: Option<&str>,
    ) -> ValidationResult {
        EventValidator::new(&self.global_defaults, &snapshot.projects).validate(
            streamer_id,
            start_section,
            end_section,
            project_number,
        )
    }

    /// 校验并生成待持久化事件
    ///
    /// # 规则
    /// - 草稿指定的项目必须存在
    /// - 校验不通过 → ApiError::ValidationError
    /// - 连续编号范围跨越工作段/尾段时拆分为两个事件
    #[instrument(skip(self, snapshot, draft), fields(streamer_id = draft.streamer_id))]
    pub fn prepare_events(
        &self,
        snapshot: &Snapshot,
        draft: &EventDraft,
    ) -> ApiResult<Vec<CleaningEvent>> {
        let project_number = draft.project_number.as_deref();
        if let Some(pn) = project_number {
            if snapshot.find_project(pn).is_none() {
                return Err(ApiError::NotFound(format!("项目 {} 不存在", pn)));
            }
        }

        let result = self.validate(
            snapshot,
            draft.streamer_id,
            draft.start_section,
            draft.end_section,
            project_number,
        );
        if !result.valid {
            let message = result
                .message
                .unwrap_or_else(|| "维护事件校验失败".to_string());
            return Err(ApiError::ValidationError(message));
        }

        let streamer_id = to_u32(draft.streamer_id, "streamerId")?;
        let start = to_u32(draft.start_section, "startSection")?;
        let end = to_u32(draft.end_section, "endSection")?;

        let topology = self.topology(snapshot, project_number);
        let span = SectionSpan::from_one_based(start, end, &topology);

        let events: Vec<CleaningEvent> = span
            .parts()
            .map(|(section_type, first, last)| {
                let event = CleaningEvent::new(
                    streamer_id,
                    section_type,
                    first,
                    last,
                    draft.cleaning_method,
                    draft.cleaned_at,
                )
                .on_vessel(draft.vessel_tag.clone());
                match project_number {
                    Some(pn) => event.in_project(pn),
                    None => event,
                }
            })
            .collect();

        tracing::info!(count = events.len(), "维护事件已生成");
        Ok(events)
    }
}

fn ratio(cleaned: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        cleaned as f64 / total as f64
    }
}

fn to_u32(value: i64, field: &str) -> ApiResult<u32> {
    u32::try_from(value).map_err(|_| ApiError::InvalidInput(format!("{} 超出范围: {}", field, value)))
}
