// ==========================================
// 测试数据构建器 - 用于集成测试
// ==========================================

use chrono::{DateTime, TimeZone, Utc};
use streamer_maintenance::domain::{
    CleaningEvent, CleaningMethod, Override, Project, SectionType, Snapshot, Topology,
    TopologyOverride,
};

/// 标准拓扑: 12 缆 x 107 段, 每 4 段一个 EB, 带 5 个尾段
pub fn standard_topology() -> Topology {
    Topology {
        num_streamers: 12,
        sections_per_streamer: 107,
        section_length_meters: 75,
        module_frequency: 4,
        channels_per_section: 6,
        use_rope_for_tail: false,
    }
}

/// 2026-03 月内的固定时间点
pub fn ts(day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, day, hour, 0, 0).unwrap()
}

// ==========================================
// CleaningEvent 构建器
// ==========================================

pub struct EventBuilder {
    id: Option<String>,
    streamer_id: u32,
    section_type: SectionType,
    start: u32,
    end: u32,
    method: CleaningMethod,
    cleaned_at: DateTime<Utc>,
    project_number: Option<String>,
}

impl EventBuilder {
    pub fn new(streamer_id: u32) -> Self {
        Self {
            id: None,
            streamer_id,
            section_type: SectionType::Active,
            start: 0,
            end: 0,
            method: CleaningMethod::Rope,
            cleaned_at: ts(1, 0),
            project_number: None,
        }
    }

    pub fn id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn active(mut self, start: u32, end: u32) -> Self {
        self.section_type = SectionType::Active;
        self.start = start;
        self.end = end;
        self
    }

    pub fn tail(mut self, start: u32, end: u32) -> Self {
        self.section_type = SectionType::Tail;
        self.start = start;
        self.end = end;
        self
    }

    pub fn method(mut self, method: CleaningMethod) -> Self {
        self.method = method;
        self
    }

    pub fn at(mut self, cleaned_at: DateTime<Utc>) -> Self {
        self.cleaned_at = cleaned_at;
        self
    }

    pub fn project(mut self, project_number: &str) -> Self {
        self.project_number = Some(project_number.to_string());
        self
    }

    pub fn build(self) -> CleaningEvent {
        let mut event = CleaningEvent::new(
            self.streamer_id,
            self.section_type,
            self.start,
            self.end,
            self.method,
            self.cleaned_at,
        )
        .on_vessel("RV-TEST");
        if let Some(id) = self.id {
            event.id = id;
        }
        event.project_number = self.project_number;
        event
    }
}

// ==========================================
// Project 构建器
// ==========================================

pub struct ProjectBuilder {
    project: Project,
}

impl ProjectBuilder {
    pub fn new(project_number: &str) -> Self {
        Self {
            project: Project::new(project_number, "RV-TEST"),
        }
    }

    pub fn streamers(mut self, n: u32) -> Self {
        self.project.overrides.num_streamers = Override::Set(n);
        self
    }

    pub fn sections(mut self, n: u32) -> Self {
        self.project.overrides.sections_per_streamer = Override::Set(n);
        self
    }

    pub fn section_length(mut self, meters: u32) -> Self {
        self.project.overrides.section_length_meters = Override::Set(meters);
        self
    }

    pub fn module_frequency(mut self, n: u32) -> Self {
        self.project.overrides.module_frequency = Override::Set(n);
        self
    }

    pub fn rope_tail(mut self, use_rope: bool) -> Self {
        self.project.overrides.use_rope_for_tail = Override::Set(use_rope);
        self
    }

    pub fn overrides(mut self, overrides: TopologyOverride) -> Self {
        self.project.overrides = overrides;
        self
    }

    pub fn active(mut self) -> Self {
        self.project.is_active = true;
        self
    }

    pub fn build(self) -> Project {
        self.project
    }
}

/// 快照构建
pub fn snapshot(projects: Vec<Project>, events: Vec<CleaningEvent>) -> Snapshot {
    Snapshot::new(projects, events)
}
