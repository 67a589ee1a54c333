//! Справочник регионов для пикера.
//!
//! Метки совпадают с теми, что принимает сервер в поле `region`.
//! Пикер иерархический: федеральный округ → регион.

/// Группа для меток, которых нет в справочнике
pub const OTHER_GROUP: &str = "Прочие";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionInfo {
    /// Метка, отправляемая на сервер
    pub label: &'static str,
    /// Федеральный округ
    pub district: &'static str,
    /// Сокращение округа (суффикс метки)
    pub district_code: &'static str,
}

pub const REGIONS: &[RegionInfo] = &[
    RegionInfo {
        label: "МОСКВА - ЦФО",
        district: "Центральный",
        district_code: "ЦФО",
    },
    RegionInfo {
        label: "САНКТ-ПЕТЕРБУРГ - СЗФО",
        district: "Северо-Западный",
        district_code: "СЗФО",
    },
    RegionInfo {
        label: "КРАСНОДАР - ЮФО",
        district: "Южный",
        district_code: "ЮФО",
    },
    RegionInfo {
        label: "КАЗАНЬ - ПФО",
        district: "Приволжский",
        district_code: "ПФО",
    },
    RegionInfo {
        label: "ЕКАТЕРИНБУРГ - УФО",
        district: "Уральский",
        district_code: "УФО",
    },
    RegionInfo {
        label: "НОВОСИБИРСК - СФО",
        district: "Сибирский",
        district_code: "СФО",
    },
    RegionInfo {
        label: "ХАБАРОВСК - ДФО",
        district: "Дальневосточный",
        district_code: "ДФО",
    },
];

pub fn find_region(label: &str) -> Option<&'static RegionInfo> {
    REGIONS.iter().find(|r| r.label == label)
}

/// Федеральный округ для метки: по справочнику, затем по суффиксу " - XXX"
pub fn district_of(label: &str) -> &'static str {
    if let Some(region) = find_region(label) {
        return region.district;
    }
    label
        .rsplit_once(" - ")
        .and_then(|(_, code)| REGIONS.iter().find(|r| r.district_code == code.trim()))
        .map(|r| r.district)
        .unwrap_or(OTHER_GROUP)
}

/// Метки справочника (используются, если сервер не отдал список регионов)
pub fn default_region_labels() -> Vec<String> {
    REGIONS.iter().map(|r| r.label.to_string()).collect()
}

/// Узел первого уровня иерархического пикера
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionGroup {
    pub district: String,
    pub options: Vec<String>,
}

/// Сгруппировать метки по федеральным округам.
///
/// Порядок групп и меток внутри группы — порядок первого появления,
/// дубликаты и пустые метки отбрасываются. Группа "Прочие" всегда последняя.
pub fn group_regions(labels: &[String]) -> Vec<RegionGroup> {
    let mut groups: Vec<RegionGroup> = Vec::new();
    let mut other = RegionGroup {
        district: OTHER_GROUP.to_string(),
        options: Vec::new(),
    };

    for label in labels {
        let label = label.trim();
        if label.is_empty() {
            continue;
        }
        let district = district_of(label);
        let group = if district == OTHER_GROUP {
            &mut other
        } else {
            let pos = match groups.iter().position(|g| g.district == district) {
                Some(pos) => pos,
                None => {
                    groups.push(RegionGroup {
                        district: district.to_string(),
                        options: Vec::new(),
                    });
                    groups.len() - 1
                }
            };
            &mut groups[pos]
        };
        if !group.options.iter().any(|o| o == label) {
            group.options.push(label.to_string());
        }
    }

    if !other.options.is_empty() {
        groups.push(other);
    }
    groups
}
