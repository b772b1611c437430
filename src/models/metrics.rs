use serde::Serialize;

// The ten wellbeing dimensions scored by every survey response. Declaration
// order is the canonical order for SQL column lists and chart series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Health,
    Love,
    Sex,
    Work,
    Rest,
    Money,
    Relationships,
    PersonalGrowth,
    LifePurpose,
    Anxiety,
}

impl Metric {
    pub const ALL: [Metric; 10] = [
        Metric::Health,
        Metric::Love,
        Metric::Sex,
        Metric::Work,
        Metric::Rest,
        Metric::Money,
        Metric::Relationships,
        Metric::PersonalGrowth,
        Metric::LifePurpose,
        Metric::Anxiety,
    ];

    pub fn column(self) -> &'static str {
        match self {
            Metric::Health => "health",
            Metric::Love => "love",
            Metric::Sex => "sex",
            Metric::Work => "work",
            Metric::Rest => "rest",
            Metric::Money => "money",
            Metric::Relationships => "relationships",
            Metric::PersonalGrowth => "personal_growth",
            Metric::LifePurpose => "life_purpose",
            Metric::Anxiety => "anxiety",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Metric::Health => "Health",
            Metric::Love => "Love",
            Metric::Sex => "Sex",
            Metric::Work => "Work",
            Metric::Rest => "Rest",
            Metric::Money => "Money",
            Metric::Relationships => "Relationships",
            Metric::PersonalGrowth => "Personal growth",
            Metric::LifePurpose => "Life purpose",
            Metric::Anxiety => "Anxiety",
        }
    }
}

#[derive(sqlx::FromRow, Serialize, Debug, Clone, PartialEq)]
pub struct MetricMeans {
    pub health: f64,
    pub love: f64,
    pub sex: f64,
    pub work: f64,
    pub rest: f64,
    pub money: f64,
    pub relationships: f64,
    pub personal_growth: f64,
    pub life_purpose: f64,
    pub anxiety: f64,
}

impl MetricMeans {
    // Values in `Metric::ALL` order.
    pub fn values(&self) -> [f64; 10] {
        [
            self.health,
            self.love,
            self.sex,
            self.work,
            self.rest,
            self.money,
            self.relationships,
            self.personal_growth,
            self.life_purpose,
            self.anxiety,
        ]
    }
}
