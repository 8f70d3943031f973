use ipnet::IpNet;
use log::warn;
use std::net::IpAddr;

/// 検証済みチャンク。採用したアドレスと不正として落としたアドレスを保持する。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidatedChunk {
    pub accepted: Vec<String>,
    pub rejected: Vec<String>,
}

/// CIDR表記としてネットワークを表しているか判定する。
/// ホスト部にビットが立っているもの (例: 10.0.0.1/8) は不正。
/// プレフィックス長のない単一アドレスは /32, /128 として扱う。
/// ネットマスク表記 (10.0.0.0/255.0.0.0) や先頭ゼロ付きのプレフィックス (/024) は
/// gcloud にそのまま渡すことになるため受け付けない。
pub fn is_valid_network(address: &str) -> bool {
    if address.contains('/') {
        match address.parse::<IpNet>() {
            Ok(net) => net.trunc() == net,
            Err(_) => false,
        }
    } else {
        address.parse::<IpAddr>().is_ok()
    }
}

/// CIDRの有効性チェック。
/// 有効なものだけを元の順序のまま残し、不正なものは警告を出して除外する。
pub fn check_addresses<S: AsRef<str>>(addresses: &[S]) -> ValidatedChunk {
    let mut validated = ValidatedChunk::default();

    for address in addresses {
        let address = address.as_ref();
        if is_valid_network(address) {
            validated.accepted.push(address.to_string());
        } else {
            warn!("{:?} is not a valid CIDR network, skipped", address);
            validated.rejected.push(address.to_string());
        }
    }

    validated
}
