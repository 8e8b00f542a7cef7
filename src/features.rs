use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const PROTOCOL_TYPES: [&str; 3] = ["tcp", "udp", "icmp"];

pub const SERVICE_TYPES: [&str; 16] = [
    "http", "private", "smtp", "domain_u", "other", "ftp_data", "ecr_i", "eco_i", "ftp", "finger",
    "telnet", "urp_i", "auth", "ntp_u", "pop_3", "time",
];

pub const FLAG_TYPES: [&str; 11] = [
    "SF", "S0", "REJ", "RSTO", "RSTR", "S1", "SH", "S2", "RSTOS0", "S3", "OTH",
];

pub const NORMAL_LABEL: &str = "normal";

/// Attack classes known to the classification model, in catalog order
///
/// Together with [NORMAL_LABEL] they make up every label the model can return.
pub const ATTACK_TYPES: [&str; 22] = [
    "back",
    "buffer_overflow",
    "ftp_write",
    "guess_passwd",
    "imap",
    "ipsweep",
    "land",
    "loadmodule",
    "multihop",
    "neptune",
    "nmap",
    "perl",
    "phf",
    "pod",
    "portsweep",
    "rootkit",
    "satan",
    "smurf",
    "spy",
    "teardrop",
    "warezclient",
    "warezmaster",
];

/// Description of a single network connection submitted for classification
///
/// Numeric features are kept as [f64] so that malformed input (negative or fractional
/// values where an integer is expected) deserializes and is reported by the validator
/// instead of being rejected while decoding.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct FeatureVector {
    pub duration: f64,
    pub protocol_type: String,
    pub service: String,
    pub flag: String,
    pub src_bytes: f64,
    pub dst_bytes: f64,
    pub land: f64,
    pub wrong_fragment: f64,
    pub urgent: f64,
    pub hot: f64,
    pub num_failed_logins: f64,
    pub logged_in: f64,
    pub num_compromised: f64,
    pub root_shell: f64,
    pub su_attempted: f64,
    pub num_root: f64,
    pub num_file_creations: f64,
    pub num_shells: f64,
    pub num_access_files: f64,
    pub num_outbound_cmds: f64,
    pub is_host_login: f64,
    pub is_guest_login: f64,
    pub count: f64,
    pub srv_count: f64,
    pub serror_rate: f64,
    pub srv_serror_rate: f64,
    pub rerror_rate: f64,
    pub srv_rerror_rate: f64,
    pub same_srv_rate: f64,
    pub diff_srv_rate: f64,
    pub srv_diff_host_rate: f64,
    pub dst_host_count: f64,
    pub dst_host_srv_count: f64,
    pub dst_host_same_srv_rate: f64,
    pub dst_host_diff_srv_rate: f64,
    pub dst_host_same_src_port_rate: f64,
    pub dst_host_srv_diff_host_rate: f64,
    pub dst_host_serror_rate: f64,
    pub dst_host_srv_serror_rate: f64,
    pub dst_host_rerror_rate: f64,
    pub dst_host_srv_rerror_rate: f64,
}

#[cfg(test)]
pub(crate) mod samples {
    use super::FeatureVector;

    /// Regular http connection, every feature within its domain
    pub fn normal_sample() -> FeatureVector {
        FeatureVector {
            duration: 0.0,
            protocol_type: "tcp".to_owned(),
            service: "http".to_owned(),
            flag: "SF".to_owned(),
            src_bytes: 181.0,
            dst_bytes: 5450.0,
            land: 0.0,
            wrong_fragment: 0.0,
            urgent: 0.0,
            hot: 0.0,
            num_failed_logins: 0.0,
            logged_in: 1.0,
            num_compromised: 0.0,
            root_shell: 0.0,
            su_attempted: 0.0,
            num_root: 0.0,
            num_file_creations: 0.0,
            num_shells: 0.0,
            num_access_files: 0.0,
            num_outbound_cmds: 0.0,
            is_host_login: 0.0,
            is_guest_login: 0.0,
            count: 8.0,
            srv_count: 8.0,
            serror_rate: 0.0,
            srv_serror_rate: 0.0,
            rerror_rate: 0.0,
            srv_rerror_rate: 0.0,
            same_srv_rate: 1.0,
            diff_srv_rate: 0.0,
            srv_diff_host_rate: 0.0,
            dst_host_count: 9.0,
            dst_host_srv_count: 9.0,
            dst_host_same_srv_rate: 1.0,
            dst_host_diff_srv_rate: 0.0,
            dst_host_same_src_port_rate: 0.11,
            dst_host_srv_diff_host_rate: 0.0,
            dst_host_serror_rate: 0.0,
            dst_host_srv_serror_rate: 0.0,
            dst_host_rerror_rate: 0.0,
            dst_host_srv_rerror_rate: 0.0,
        }
    }

    /// SYN flood against a single host, shaped like a neptune attack
    pub fn attack_sample() -> FeatureVector {
        FeatureVector {
            flag: "S0".to_owned(),
            src_bytes: 0.0,
            dst_bytes: 0.0,
            logged_in: 0.0,
            count: 123.0,
            srv_count: 6.0,
            serror_rate: 1.0,
            srv_serror_rate: 1.0,
            same_srv_rate: 0.05,
            diff_srv_rate: 0.07,
            dst_host_count: 255.0,
            dst_host_srv_count: 6.0,
            dst_host_same_srv_rate: 0.02,
            dst_host_diff_srv_rate: 0.06,
            dst_host_same_src_port_rate: 0.0,
            dst_host_serror_rate: 1.0,
            dst_host_srv_serror_rate: 1.0,
            ..normal_sample()
        }
    }
}
