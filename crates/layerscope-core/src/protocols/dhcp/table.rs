use crate::record::Tier;

use super::layout;

/// How the cursor moves past a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidthRule {
    /// PAD and END: the tag byte alone, no length byte follows.
    Single,
    /// Tag, length byte, then `length` value bytes.
    Declared,
    /// As `Declared`, and the value is expected to be exactly `n` bytes.
    /// The cursor still follows the length byte actually present.
    Expected(u8),
}

impl WidthRule {
    /// Bytes consumed by a record whose length byte reads `declared`.
    pub fn advance(self, declared: u8) -> usize {
        match self {
            WidthRule::Single => 1,
            WidthRule::Declared | WidthRule::Expected(_) => {
                layout::VALUE_OFFSET + declared as usize
            }
        }
    }

    pub fn accepts(self, declared: u8) -> bool {
        match self {
            WidthRule::Expected(n) => n == declared,
            _ => true,
        }
    }
}

/// One-byte enumerations decoded into symbolic names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameSet {
    MessageType,
    OptionOverload,
    NetbiosNodeType,
}

impl NameSet {
    pub fn name(self, code: u8) -> Option<&'static str> {
        match self {
            NameSet::MessageType => match code {
                layout::DHCPDISCOVER => Some("Discover"),
                layout::DHCPOFFER => Some("Offer"),
                layout::DHCPREQUEST => Some("Request"),
                layout::DHCPDECLINE => Some("Decline"),
                layout::DHCPACK => Some("Ack"),
                layout::DHCPNAK => Some("Nak"),
                layout::DHCPRELEASE => Some("Release"),
                layout::DHCPINFORM => Some("Inform"),
                _ => None,
            },
            NameSet::OptionOverload => match code {
                layout::OVERLOAD_FILE => Some("file field"),
                layout::OVERLOAD_SNAME => Some("sname field"),
                layout::OVERLOAD_BOTH => Some("file and sname fields"),
                _ => None,
            },
            NameSet::NetbiosNodeType => match code {
                layout::NODE_B => Some("B-node"),
                layout::NODE_P => Some("P-node"),
                layout::NODE_M => Some("M-node"),
                layout::NODE_H => Some("H-node"),
                _ => None,
            },
        }
    }
}

/// Options whose value has an internal layout of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extractor {
    ParameterRequestList,
    ClientIdentifier,
    ClientFqdn,
    RelayAgent,
    Authentication,
    SipServers,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterpreterKind {
    Addresses,
    Text,
    U32,
    U16,
    U8,
    Named(NameSet),
    Structured(Extractor),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionSpec {
    pub tag: u8,
    pub label: &'static str,
    pub kind: InterpreterKind,
    pub tier: Tier,
    pub width: WidthRule,
}

impl OptionSpec {
    const fn new(tag: u8, label: &'static str, kind: InterpreterKind, tier: Tier) -> Self {
        Self {
            tag,
            label,
            kind,
            tier,
            width: WidthRule::Declared,
        }
    }

    const fn fixed(
        tag: u8,
        label: &'static str,
        kind: InterpreterKind,
        tier: Tier,
        len: u8,
    ) -> Self {
        Self {
            tag,
            label,
            kind,
            tier,
            width: WidthRule::Expected(len),
        }
    }
}

use InterpreterKind::{Addresses, Named, Structured, Text, U8, U16, U32};
use Tier::{Common, Detailed, Essential};

/// Known tags, sorted by tag for binary search.
pub static OPTION_TABLE: &[OptionSpec] = &[
    OptionSpec::fixed(1, "Subnet mask", Addresses, Common, 4),
    OptionSpec::fixed(2, "Time offset", U32, Detailed, 4),
    OptionSpec::new(3, "Router", Addresses, Common),
    OptionSpec::new(4, "Time server", Addresses, Detailed),
    OptionSpec::new(5, "Name server", Addresses, Detailed),
    OptionSpec::new(6, "DNS", Addresses, Common),
    OptionSpec::new(7, "Log server", Addresses, Detailed),
    OptionSpec::new(8, "Cookie server", Addresses, Detailed),
    OptionSpec::new(9, "LPR server", Addresses, Detailed),
    OptionSpec::new(10, "Impress server", Addresses, Detailed),
    OptionSpec::new(11, "Resource location server", Addresses, Detailed),
    OptionSpec::new(12, "Hostname", Text, Detailed),
    OptionSpec::fixed(13, "Boot file size", U16, Detailed, 2),
    OptionSpec::new(14, "Merit dump file", Text, Detailed),
    OptionSpec::new(15, "Domain name", Text, Detailed),
    OptionSpec::fixed(16, "Swap server", Addresses, Detailed, 4),
    OptionSpec::new(17, "Root path", Text, Detailed),
    OptionSpec::new(18, "Extensions path", Text, Detailed),
    OptionSpec::fixed(19, "IP forwarding", U8, Detailed, 1),
    OptionSpec::fixed(20, "Non-local source routing", U8, Detailed, 1),
    OptionSpec::new(21, "Policy filter", Addresses, Detailed),
    OptionSpec::fixed(22, "Maximum datagram reassembly size", U16, Detailed, 2),
    OptionSpec::fixed(23, "Default IP time-to-live", U8, Detailed, 1),
    OptionSpec::fixed(24, "Path MTU aging timeout", U32, Detailed, 4),
    OptionSpec::new(25, "Path MTU plateau table", Text, Detailed),
    OptionSpec::fixed(26, "Interface MTU", U16, Detailed, 2),
    OptionSpec::fixed(27, "All subnets are local", U8, Detailed, 1),
    OptionSpec::fixed(28, "Broadcast address", Addresses, Detailed, 4),
    OptionSpec::fixed(29, "Perform mask discovery", U8, Detailed, 1),
    OptionSpec::fixed(30, "Mask supplier", U8, Detailed, 1),
    OptionSpec::fixed(31, "Perform router discovery", U8, Detailed, 1),
    OptionSpec::fixed(32, "Router solicitation address", Addresses, Detailed, 4),
    OptionSpec::new(33, "Static route", Addresses, Detailed),
    OptionSpec::fixed(34, "Trailer encapsulation", U8, Detailed, 1),
    OptionSpec::fixed(35, "ARP cache timeout", U32, Detailed, 4),
    OptionSpec::fixed(36, "Ethernet encapsulation", U8, Detailed, 1),
    OptionSpec::fixed(37, "TCP default TTL", U8, Detailed, 1),
    OptionSpec::fixed(38, "TCP keepalive interval", U32, Detailed, 4),
    OptionSpec::fixed(39, "TCP keepalive garbage", U8, Detailed, 1),
    OptionSpec::new(40, "NIS domain", Text, Detailed),
    OptionSpec::new(41, "NIS servers", Addresses, Detailed),
    OptionSpec::new(42, "NTP servers", Addresses, Detailed),
    OptionSpec::new(43, "Vendor specific information", Text, Detailed),
    OptionSpec::new(44, "NetBIOS name server", Addresses, Detailed),
    OptionSpec::new(45, "NetBIOS datagram distribution server", Addresses, Detailed),
    OptionSpec::fixed(46, "NetBIOS node type", Named(NameSet::NetbiosNodeType), Detailed, 1),
    OptionSpec::new(47, "NetBIOS scope", Text, Detailed),
    OptionSpec::new(48, "X Window font server", Addresses, Detailed),
    OptionSpec::new(49, "X Window display manager", Addresses, Detailed),
    OptionSpec::fixed(50, "Requested IP address", Addresses, Detailed, 4),
    OptionSpec::fixed(51, "Lease time", U32, Common, 4),
    OptionSpec::fixed(52, "Option overload", Named(NameSet::OptionOverload), Detailed, 1),
    OptionSpec::fixed(53, "DHCP message type", Named(NameSet::MessageType), Essential, 1),
    OptionSpec::fixed(54, "DHCP server", Addresses, Common, 4),
    OptionSpec::new(55, "Parameter request list", Structured(Extractor::ParameterRequestList), Detailed),
    OptionSpec::new(56, "Message", Text, Detailed),
    OptionSpec::fixed(57, "Maximum DHCP message size", U16, Detailed, 2),
    OptionSpec::fixed(58, "Renewal time", U32, Detailed, 4),
    OptionSpec::fixed(59, "Rebinding time", U32, Detailed, 4),
    OptionSpec::new(60, "Vendor class identifier", Text, Detailed),
    OptionSpec::new(61, "Client identifier", Structured(Extractor::ClientIdentifier), Detailed),
    OptionSpec::new(64, "NIS+ domain", Text, Detailed),
    OptionSpec::new(65, "NIS+ servers", Addresses, Detailed),
    OptionSpec::new(66, "TFTP server", Text, Detailed),
    OptionSpec::new(67, "Bootfile", Text, Detailed),
    OptionSpec::new(68, "Mobile IP home agent", Addresses, Detailed),
    OptionSpec::new(69, "SMTP server", Addresses, Detailed),
    OptionSpec::new(70, "POP3 server", Addresses, Detailed),
    OptionSpec::new(71, "NNTP server", Addresses, Detailed),
    OptionSpec::new(72, "WWW server", Addresses, Detailed),
    OptionSpec::new(73, "Finger server", Addresses, Detailed),
    OptionSpec::new(74, "IRC server", Addresses, Detailed),
    OptionSpec::new(75, "StreetTalk server", Addresses, Detailed),
    OptionSpec::new(76, "StreetTalk directory assistance", Addresses, Detailed),
    OptionSpec::new(77, "User class", Text, Detailed),
    OptionSpec::new(78, "SLP directory agent", Text, Detailed),
    OptionSpec::new(79, "SLP scope", Text, Detailed),
    OptionSpec::new(80, "SLP naming authority", Text, Detailed),
    OptionSpec::new(81, "Client FQDN", Structured(Extractor::ClientFqdn), Detailed),
    OptionSpec::new(82, "Relay agent information", Structured(Extractor::RelayAgent), Detailed),
    OptionSpec::new(84, "Agent subnet mask", Addresses, Detailed),
    OptionSpec::new(85, "NDS servers", Addresses, Detailed),
    OptionSpec::new(86, "NDS tree name", Text, Detailed),
    OptionSpec::new(87, "NDS context", Text, Detailed),
    OptionSpec::new(88, "TZ string", Text, Detailed),
    OptionSpec::new(89, "FQDN", Text, Detailed),
    OptionSpec::new(90, "Authentication", Structured(Extractor::Authentication), Detailed),
    OptionSpec::new(91, "VINES servers", Addresses, Detailed),
    OptionSpec::fixed(92, "Server rank", U32, Detailed, 4),
    OptionSpec::fixed(93, "Client architecture", U16, Detailed, 2),
    OptionSpec::new(94, "Client network device interface", Text, Detailed),
    OptionSpec::new(95, "LDAP URL", Text, Detailed),
    OptionSpec::new(96, "6over4", Addresses, Detailed),
    OptionSpec::new(97, "Client GUID", Text, Detailed),
    OptionSpec::new(98, "User authentication protocol", Text, Detailed),
    OptionSpec::new(100, "Time zone (POSIX)", Text, Detailed),
    OptionSpec::new(101, "Time zone (tz database)", Text, Detailed),
    OptionSpec::fixed(110, "IPX compatibility", U32, Detailed, 4),
    OptionSpec::new(112, "NetInfo parent server", Addresses, Detailed),
    OptionSpec::new(113, "NetInfo parent server tag", Text, Detailed),
    OptionSpec::new(114, "URL", Text, Detailed),
    OptionSpec::new(115, "Failover", Text, Detailed),
    OptionSpec::fixed(116, "Auto-configure", U8, Detailed, 1),
    OptionSpec::new(117, "Name service search", Text, Detailed),
    OptionSpec::fixed(118, "Subnet selection", Addresses, Detailed, 4),
    OptionSpec::new(119, "Domain search", Text, Detailed),
    OptionSpec::new(120, "SIP servers", Structured(Extractor::SipServers), Detailed),
    OptionSpec::new(121, "Classless static route", Text, Detailed),
    OptionSpec::new(126, "Extended request", Text, Detailed),
    OptionSpec::new(127, "Extended option", Text, Detailed),
    OptionSpec::new(190, "Printer name", Text, Detailed),
    OptionSpec::new(191, "MDHCP server", Addresses, Detailed),
];

pub fn lookup(tag: u8) -> Option<&'static OptionSpec> {
    OPTION_TABLE
        .binary_search_by_key(&tag, |spec| spec.tag)
        .ok()
        .and_then(|idx| OPTION_TABLE.get(idx))
}

/// Width rule for any tag, including PAD/END and tags absent from the table.
pub fn width_of(tag: u8) -> WidthRule {
    match tag {
        layout::PAD_TAG | layout::END_TAG => WidthRule::Single,
        _ => lookup(tag).map_or(WidthRule::Declared, |spec| spec.width),
    }
}
