use std::sync::Arc;

use super::data_source::DataSource;
use super::error::*;
use super::pipeline::ExportPipeline;
use super::ServiceFuture;
use models::*;
use prelude::*;
use utils::log_error;

pub trait MetricsService: Send + Sync + 'static {
    /// One upstream fetch per call. Only `ErrorKind::Fatal` is returned as an error,
    /// any other failure is reported as `etherscan_up 0`.
    fn get_metrics(&self) -> ServiceFuture<Exposition>;
}

#[derive(Clone)]
pub struct MetricsServiceImpl {
    data_source: Arc<DataSource>,
    pipeline: ExportPipeline,
}

impl MetricsServiceImpl {
    pub fn new(data_source: Arc<DataSource>, pipeline: ExportPipeline) -> Self {
        MetricsServiceImpl { data_source, pipeline }
    }
}

impl MetricsService for MetricsServiceImpl {
    fn get_metrics(&self) -> ServiceFuture<Exposition> {
        let pipeline = self.pipeline;
        Box::new(self.data_source.fetch().then(move |result| match result {
            Ok(body) => Ok(pipeline.export(&body)),
            Err(e) => match e.kind() {
                ErrorKind::Fatal => Err(e),
                _ => {
                    log_error(&e);
                    Ok(pipeline.export_unavailable())
                }
            },
        }))
    }
}

#[cfg(test)]
#[derive(Default)]
pub struct MetricsServiceMock;

#[cfg(test)]
impl MetricsService for MetricsServiceMock {
    fn get_metrics(&self) -> ServiceFuture<Exposition> {
        let mut exposition = Exposition::default();
        exposition.push(Sample::new("etherscan_up", "1".to_string()));
        Box::new(Ok::<_, Error>(exposition).into_future())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use services::DataSourceMock;
    use tokio_core::reactor::Core;

    fn create_metrics_service(data_source: DataSourceMock) -> MetricsServiceImpl {
        MetricsServiceImpl::new(Arc::new(data_source), ExportPipeline::default())
    }

    fn scrape(data_source: DataSourceMock) -> Result<String, Error> {
        let mut core = Core::new().unwrap();
        let service = create_metrics_service(data_source);
        core.run(service.get_metrics()).map(|exposition| exposition.to_string())
    }

    #[test]
    fn test_healthy_upstream() {
        let body = r#"{"status":"1","message":"OK","result":[
            {"account":"0xb","balance":"2000000000000000000"},
            {"account":"0xa","balance":"1"}
        ]}"#;
        let text = scrape(DataSourceMock::with_body(body)).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "etherscan_up 1",
                "etherscan_balance{account=\"0xb\"} 2.000000000000000000",
                "etherscan_balance{account=\"0xa\"} 0.000000000000000001",
            ]
        );
    }

    #[test]
    fn test_negative_status() {
        let body = r#"{"status":"0","message":"NOTOK","result":"Max rate limit reached"}"#;
        let text = scrape(DataSourceMock::with_body(body)).unwrap();
        assert_eq!(text, "etherscan_up 0\n");
    }

    #[test]
    fn test_transport_error_degrades() {
        let text = scrape(DataSourceMock::with_error(ErrorKind::Unavailable)).unwrap();
        assert_eq!(text, "etherscan_up 0\n");
        let text = scrape(DataSourceMock::with_error(ErrorKind::Internal)).unwrap();
        assert_eq!(text, "etherscan_up 0\n");
    }

    #[test]
    fn test_fatal_error_is_propagated() {
        let err = scrape(DataSourceMock::with_error(ErrorKind::Fatal)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Fatal);
    }

    #[test]
    fn test_scrapes_are_identical() {
        let body = r#"{"status":"1","message":"OK","result":[{"account":"0xa","balance":"42"}]}"#;
        let first = scrape(DataSourceMock::with_body(body)).unwrap();
        let second = scrape(DataSourceMock::with_body(body)).unwrap();
        assert_eq!(first, second);
    }
}
