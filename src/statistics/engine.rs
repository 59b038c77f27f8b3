// ABOUTME: Statistics engine computing weekly/monthly summaries, trends, and distribution
// ABOUTME: Pure aggregation over store-fetched records with injected clock and config
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FitTrack
//! Workout statistics engine
#![allow(clippy::cast_possible_truncation)] // counts and elapsed-ms fit well within target widths

use crate::config::StatisticsConfig;
use crate::constants::{formats, labels};
use crate::errors::{AppError, AppResult};
use crate::logging::AppLogger;
use crate::models::WorkoutRecord;
use crate::statistics::aggregates::{
    distinct_workout_days, percent_change, percent_of_total, record_count, total_calories,
    total_duration_minutes,
};
use crate::store::WorkoutStore;
use crate::utils::time::{
    iso_week_label, month_start, next_month_start, week_end_exclusive, week_last_day, week_start,
    Clock, SystemClock,
};
use async_trait::async_trait;
use chrono::{Datelike, Duration, Months, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use uuid::Uuid;

/// Trait for workout statistics computation
#[async_trait]
pub trait StatisticsEngineTrait {
    /// Summary of the week containing `date` (default: today), with percent
    /// changes against the immediately preceding week
    async fn weekly_summary(
        &self,
        user_id: Uuid,
        date: Option<NaiveDate>,
    ) -> AppResult<WeeklySummary>;

    /// Summary of a calendar month (default: the current month)
    async fn monthly_summary(
        &self,
        user_id: Uuid,
        year: Option<i32>,
        month: Option<u32>,
    ) -> AppResult<MonthlySummary>;

    /// Aggregates for one exact calendar date
    async fn daily_breakdown(&self, user_id: Uuid, date: NaiveDate) -> AppResult<DailyBreakdown>;

    /// Sparse time series bucketed by day, ISO week, or calendar month
    async fn trends(&self, user_id: Uuid, period: TrendPeriod) -> AppResult<Vec<TrendPoint>>;

    /// Per-exercise-type share of all records, most frequent first
    async fn exercise_distribution(
        &self,
        user_id: Uuid,
    ) -> AppResult<Vec<ExerciseDistributionEntry>>;
}

/// Statistics engine over an injected store and clock
pub struct StatisticsEngine<S> {
    store: Arc<S>,
    clock: Arc<dyn Clock>,
    config: StatisticsConfig,
}

impl<S: WorkoutStore> StatisticsEngine<S> {
    /// Create an engine with the system clock and global configuration
    pub fn new(store: Arc<S>) -> Self {
        Self::with_clock(store, Arc::new(SystemClock))
    }

    /// Create an engine with a custom clock
    pub fn with_clock(store: Arc<S>, clock: Arc<dyn Clock>) -> Self {
        Self {
            store,
            clock,
            config: StatisticsConfig::global().clone(),
        }
    }

    /// Create an engine with a custom clock and configuration
    pub fn with_config(store: Arc<S>, clock: Arc<dyn Clock>, config: StatisticsConfig) -> Self {
        Self {
            store,
            clock,
            config,
        }
    }

    /// Fetch records and re-apply the soft-delete filter defensively
    async fn fetch_live(
        &self,
        user_id: Uuid,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> AppResult<Vec<WorkoutRecord>> {
        let records = self
            .store
            .workout_records(user_id, start, end)
            .await
            .map_err(AppError::from)?;
        Ok(records.into_iter().filter(|r| r.is_live()).collect())
    }

    /// One zero-defaulted entry per day of the week starting at `start`
    fn build_daily_breakdown(records: &[WorkoutRecord], start: NaiveDate) -> Vec<DailyBreakdown> {
        (0..7)
            .map(|i| {
                let date = start + Duration::days(i);
                let day_records: Vec<&WorkoutRecord> = records
                    .iter()
                    .filter(|r| r.exercise_date == date)
                    .collect();
                DailyBreakdown {
                    date: date.format(formats::DATE_FORMAT).to_string(),
                    day_of_week: date.format(formats::DAY_NAME_FORMAT).to_string(),
                    duration_minutes: day_records.iter().map(|r| r.duration_minutes).sum(),
                    calories_burned: day_records.iter().map(|r| r.calories_burned).sum(),
                    workout_count: day_records.len() as u32,
                }
            })
            .collect()
    }

    fn trend_lookback_start(&self, period: TrendPeriod, today: NaiveDate) -> NaiveDate {
        match period {
            TrendPeriod::Day => {
                today - Duration::days(i64::from(self.config.trends.day_lookback_days))
            }
            TrendPeriod::Week => today
                .checked_sub_months(Months::new(self.config.trends.week_lookback_months))
                .unwrap_or(NaiveDate::MIN),
            TrendPeriod::Month => today
                .checked_sub_months(Months::new(self.config.trends.month_lookback_months))
                .unwrap_or(NaiveDate::MIN),
        }
    }
}

#[async_trait]
impl<S: WorkoutStore> StatisticsEngineTrait for StatisticsEngine<S> {
    async fn weekly_summary(
        &self,
        user_id: Uuid,
        date: Option<NaiveDate>,
    ) -> AppResult<WeeklySummary> {
        let started = std::time::Instant::now();
        let reference = date.unwrap_or_else(|| self.clock.now().date_naive());
        let start = week_start(reference);
        let end = week_end_exclusive(start);
        let previous_start = start - Duration::days(7);

        let current = self.fetch_live(user_id, Some(start), Some(end)).await?;
        let previous = self
            .fetch_live(user_id, Some(previous_start), Some(start))
            .await?;

        let total_duration = total_duration_minutes(&current);
        let total_calories_burned = total_calories(&current);
        let workout_days = distinct_workout_days(&current);

        let duration_change_percent = percent_change(
            Decimal::from(total_duration_minutes(&previous)),
            Decimal::from(total_duration),
        );
        let calories_change_percent =
            percent_change(total_calories(&previous), total_calories_burned);
        let workout_days_change_percent = percent_change(
            Decimal::from(distinct_workout_days(&previous)),
            Decimal::from(workout_days),
        );

        AppLogger::log_statistics_request(
            &user_id.to_string(),
            "weekly_summary",
            current.len(),
            started.elapsed().as_millis() as u64,
        );

        Ok(WeeklySummary {
            week_start: start.format(formats::DATE_FORMAT).to_string(),
            week_end: week_last_day(start).format(formats::DATE_FORMAT).to_string(),
            total_duration_minutes: total_duration,
            total_calories_burned,
            workout_days,
            total_workout_count: record_count(&current),
            daily_breakdown: Self::build_daily_breakdown(&current, start),
            duration_change_percent,
            calories_change_percent,
            workout_days_change_percent,
        })
    }

    async fn monthly_summary(
        &self,
        user_id: Uuid,
        year: Option<i32>,
        month: Option<u32>,
    ) -> AppResult<MonthlySummary> {
        let started = std::time::Instant::now();
        let today = self.clock.now().date_naive();
        let year = year.unwrap_or_else(|| today.year());
        let month = month.unwrap_or_else(|| today.month());

        let start = month_start(year, month)?;
        let end = next_month_start(year, month)?;

        let records = self.fetch_live(user_id, Some(start), Some(end)).await?;

        let total_duration = total_duration_minutes(&records);
        let total_calories_burned = total_calories(&records);
        let workout_days = distinct_workout_days(&records);

        let (average_daily_duration, average_daily_calories) = if workout_days > 0 {
            let days = Decimal::from(workout_days);
            (
                (Decimal::from(total_duration) / days).round_dp(2),
                (total_calories_burned / days).round_dp(2),
            )
        } else {
            (Decimal::ZERO, Decimal::ZERO)
        };

        AppLogger::log_statistics_request(
            &user_id.to_string(),
            "monthly_summary",
            records.len(),
            started.elapsed().as_millis() as u64,
        );

        Ok(MonthlySummary {
            month: start.format(formats::MONTH_FORMAT).to_string(),
            total_duration_minutes: total_duration,
            total_calories_burned,
            workout_days,
            total_records: record_count(&records),
            average_daily_duration,
            average_daily_calories,
        })
    }

    async fn daily_breakdown(&self, user_id: Uuid, date: NaiveDate) -> AppResult<DailyBreakdown> {
        let records = self
            .fetch_live(user_id, Some(date), Some(date + Duration::days(1)))
            .await?;

        Ok(DailyBreakdown {
            date: date.format(formats::DATE_FORMAT).to_string(),
            day_of_week: date.format(formats::DAY_NAME_FORMAT).to_string(),
            duration_minutes: total_duration_minutes(&records),
            calories_burned: total_calories(&records),
            workout_count: record_count(&records),
        })
    }

    async fn trends(&self, user_id: Uuid, period: TrendPeriod) -> AppResult<Vec<TrendPoint>> {
        let started = std::time::Instant::now();
        let today = self.clock.now().date_naive();
        let lookback_start = self.trend_lookback_start(period, today);

        let records = self
            .fetch_live(user_id, Some(lookback_start), None)
            .await?;

        // Keyed by period start date, so iteration is already chronological
        let mut buckets: BTreeMap<NaiveDate, TrendBucket> = BTreeMap::new();
        for record in &records {
            let key = match period {
                TrendPeriod::Day => record.exercise_date,
                TrendPeriod::Week => week_start(record.exercise_date),
                TrendPeriod::Month => {
                    month_start(record.exercise_date.year(), record.exercise_date.month())?
                }
            };
            let bucket = buckets.entry(key).or_default();
            bucket.duration_minutes += record.duration_minutes;
            bucket.calories_burned += record.calories_burned;
            bucket.workout_count += 1;
        }

        AppLogger::log_statistics_request(
            &user_id.to_string(),
            "trends",
            records.len(),
            started.elapsed().as_millis() as u64,
        );

        Ok(buckets
            .into_iter()
            .map(|(key, bucket)| TrendPoint {
                period: match period {
                    TrendPeriod::Day => key.format(formats::DATE_FORMAT).to_string(),
                    TrendPeriod::Week => iso_week_label(key),
                    TrendPeriod::Month => key.format(formats::MONTH_FORMAT).to_string(),
                },
                duration_minutes: bucket.duration_minutes,
                calories_burned: bucket.calories_burned,
                workout_count: bucket.workout_count,
                period_type: period,
            })
            .collect())
    }

    async fn exercise_distribution(
        &self,
        user_id: Uuid,
    ) -> AppResult<Vec<ExerciseDistributionEntry>> {
        let records = self.fetch_live(user_id, None, None).await?;
        let total = record_count(&records);

        let mut groups: HashMap<String, TrendBucket> = HashMap::new();
        for record in &records {
            let name = record
                .exercise_type_name
                .clone()
                .unwrap_or_else(|| labels::UNKNOWN_EXERCISE.to_owned());
            let bucket = groups.entry(name).or_default();
            bucket.duration_minutes += record.duration_minutes;
            bucket.calories_burned += record.calories_burned;
            bucket.workout_count += 1;
        }

        let mut entries: Vec<ExerciseDistributionEntry> = groups
            .into_iter()
            .map(|(name, bucket)| ExerciseDistributionEntry {
                percentage_of_total: percent_of_total(bucket.workout_count, total),
                exercise_name: name,
                total_duration_minutes: bucket.duration_minutes,
                total_calories_burned: bucket.calories_burned,
                record_count: bucket.workout_count,
            })
            .collect();

        // Descending by frequency; name breaks ties deterministically
        entries.sort_by(|a, b| {
            b.record_count
                .cmp(&a.record_count)
                .then_with(|| a.exercise_name.cmp(&b.exercise_name))
        });

        Ok(entries)
    }
}

/// Trend bucketing granularity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendPeriod {
    /// One bucket per calendar date
    Day,
    /// One bucket per ISO-8601 week
    Week,
    /// One bucket per calendar month
    Month,
}

impl FromStr for TrendPeriod {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "day" => Ok(Self::Day),
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            other => Err(AppError::invalid_period_type(other)),
        }
    }
}

impl fmt::Display for TrendPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Day => write!(f, "day"),
            Self::Week => write!(f, "week"),
            Self::Month => write!(f, "month"),
        }
    }
}

/// Running sums for one trend or distribution bucket
#[derive(Debug, Default)]
struct TrendBucket {
    duration_minutes: u32,
    calories_burned: Decimal,
    workout_count: u32,
}

/// Weekly summary with percent changes against the preceding week
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklySummary {
    /// Monday of the summarized week, `yyyy-MM-dd`
    pub week_start: String,
    /// Last calendar day (Sunday) of the summarized week, `yyyy-MM-dd`
    pub week_end: String,
    pub total_duration_minutes: u32,
    pub total_calories_burned: Decimal,
    /// Distinct calendar days with at least one workout
    pub workout_days: u32,
    pub total_workout_count: u32,
    /// Exactly seven entries, Monday through Sunday; empty days are
    /// zero-valued, never absent
    pub daily_breakdown: Vec<DailyBreakdown>,
    pub duration_change_percent: Decimal,
    pub calories_change_percent: Decimal,
    pub workout_days_change_percent: Decimal,
}

/// Aggregates for a single calendar date
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyBreakdown {
    /// `yyyy-MM-dd`
    pub date: String,
    /// English day name, e.g. `Monday`
    pub day_of_week: String,
    pub duration_minutes: u32,
    pub calories_burned: Decimal,
    pub workout_count: u32,
}

/// Calendar-month summary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlySummary {
    /// `yyyy-MM`
    pub month: String,
    pub total_duration_minutes: u32,
    pub total_calories_burned: Decimal,
    pub workout_days: u32,
    pub total_records: u32,
    /// Per-workout-day average, 0 when the month has no workouts
    pub average_daily_duration: Decimal,
    pub average_daily_calories: Decimal,
}

/// One aggregated bucket of a trend time series
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendPoint {
    /// Period label: `yyyy-MM-dd`, `IIII-Www`, or `yyyy-MM` by period type
    pub period: String,
    pub duration_minutes: u32,
    pub calories_burned: Decimal,
    pub workout_count: u32,
    pub period_type: TrendPeriod,
}

/// One exercise type's share of all logged records
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseDistributionEntry {
    pub exercise_name: String,
    pub total_duration_minutes: u32,
    pub total_calories_burned: Decimal,
    pub record_count: u32,
    /// Share of total record count, rounded to two places
    pub percentage_of_total: Decimal,
}
