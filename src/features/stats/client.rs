use crate::{
    app_lib::{ApiClient, AppError, Transport},
    features::{
        stats::types::{BloodStat, StatsEnvelope, into_stats},
        users::types::DonorPage,
    },
};

pub async fn blood_type_stats<T: Transport>(
    api: &ApiClient<T>,
) -> Result<Vec<BloodStat>, AppError> {
    let envelope: StatsEnvelope = api.get_json("/count-by-blood-type").await?;
    Ok(into_stats(envelope.data))
}

/// Number of donors currently able to give.
pub async fn available_donor_count<T: Transport>(api: &ApiClient<T>) -> Result<u64, AppError> {
    let page: DonorPage = api.get_json("/available-donor").await?;
    Ok(page.count)
}

#[cfg(test)]
mod tests {
    use super::{available_donor_count, blood_type_stats};
    use crate::app_lib::testing::{FakeTransport, client};

    #[tokio::test]
    async fn overview_figures() {
        let transport = FakeTransport::new()
            .respond(200, r#"{"data":{"B+":{"total":4,"available":3}}}"#)
            .respond(200, r#"{"users":[],"count":12}"#);
        let api = client(transport.clone(), Some("t"));

        let stats = blood_type_stats(&api).await.expect("stats");
        let count = available_donor_count(&api).await.expect("count");

        assert_eq!(stats[0].blood_type, "B+");
        assert_eq!(count, 12);
        assert_eq!(transport.requests()[1].url, "https://api.test/api/available-donor");
    }
}
