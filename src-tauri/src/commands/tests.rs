//! Command Tests
//!
//! Command bodies run against an in-memory HabitApi.

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use reqwest::StatusCode;

    use crate::api::{ApiError, ApiResult, HabitApi};
    use crate::commands::day_cmd::fetch_day;
    use crate::commands::habit_cmd::{create, toggle};
    use crate::domain::{DayInfo, HabitSummary, NewHabit};

    #[derive(Default)]
    struct FakeApi {
        fail: bool,
        created: Mutex<Vec<NewHabit>>,
        toggled: Mutex<Vec<String>>,
    }

    impl FakeApi {
        fn failing() -> Self {
            Self { fail: true, ..Default::default() }
        }

        fn check(&self) -> ApiResult<()> {
            if self.fail {
                Err(ApiError::Status(StatusCode::INTERNAL_SERVER_ERROR))
            } else {
                Ok(())
            }
        }
    }

    #[async_trait]
    impl HabitApi for FakeApi {
        async fn day(&self, _date: &str) -> ApiResult<DayInfo> {
            self.check()?;
            Ok(DayInfo {
                possible_habits: vec![HabitSummary { id: "h1".into(), title: "Correr".into() }],
                completed_habits: vec!["h1".into()],
            })
        }

        async fn toggle(&self, habit_id: &str) -> ApiResult<Option<bool>> {
            self.check()?;
            self.toggled.lock().unwrap().push(habit_id.to_string());
            Ok(None)
        }

        async fn create(&self, habit: &NewHabit) -> ApiResult<()> {
            self.check()?;
            self.created.lock().unwrap().push(habit.clone());
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_fetch_day() {
        let api = FakeApi::default();
        let info = fetch_day(&api, "2024-03-05").await.expect("day");
        assert_eq!(info.completed_habits, vec!["h1".to_string()]);
    }

    #[tokio::test]
    async fn test_fetch_day_failure_is_string() {
        let api = FakeApi::failing();
        let err = fetch_day(&api, "2024-03-05").await.unwrap_err();
        assert!(err.contains("500"));
    }

    #[tokio::test]
    async fn test_toggle_passes_id() {
        let api = FakeApi::default();
        assert_eq!(toggle(&api, "h9").await, Ok(None));
        assert_eq!(*api.toggled.lock().unwrap(), vec!["h9".to_string()]);
    }

    #[tokio::test]
    async fn test_create_normalizes_before_sending() {
        let api = FakeApi::default();
        create(&api, " Ler ", vec![3, 1]).await.expect("create");

        let created = api.created.lock().unwrap();
        assert_eq!(created.len(), 1);
        assert_eq!(created[0].title, "Ler");
        assert_eq!(created[0].week_days, vec![1, 3]);
    }

    #[tokio::test]
    async fn test_create_invalid_never_reaches_api() {
        let api = FakeApi::default();
        assert!(create(&api, "", vec![1]).await.is_err());
        assert!(create(&api, "Ler", vec![]).await.is_err());
        assert!(api.created.lock().unwrap().is_empty());
    }
}
