//! Ariane XML payloads used across tests.

/// Smallest payload the tree codec must surface.
pub const TEST_VALUE_PAYLOAD: &str = "<CaveFile><Test>Value</Test></CaveFile>";

/// A complete survey: two shots, one layer and an opaque carto section.
pub const SURVEY_PAYLOAD: &str = r#"<?xml version="1.0" encoding="utf-8" standalone="yes"?>
<CaveFile>
    <Data>
        <SRVD>
            <Azimut>0.0</Azimut>
            <ClosureToID>-1</ClosureToID>
            <Color>0x00ffffff</Color>
            <Comment>Lead on the right side.</Comment>
            <Date>2024-04-22</Date>
            <Depth>0.0</Depth>
            <DepthIn>0.0</DepthIn>
            <Down>0.0</Down>
            <Excluded>false</Excluded>
            <Explorer>Ariane</Explorer>
            <FromID>-1</FromID>
            <ID>0</ID>
            <Inclination>0.0</Inclination>
            <Latitude>0.0</Latitude>
            <Left>0.0</Left>
            <Length>0.0</Length>
            <Locked>true</Locked>
            <Longitude>0.0</Longitude>
            <Name>ABC</Name>
            <Profiletype>VERTICAL</Profiletype>
            <Right>0.0</Right>
            <Section>Start</Section>
            <Shape>
                <RadiusCollection>
                    <RadiusVector>
                        <TensionCorridor>1.0</TensionCorridor>
                        <TensionProfile>1.0</TensionProfile>
                        <angle>0.0</angle>
                        <length>0.0</length>
                    </RadiusVector>
                    <RadiusVector>
                        <TensionCorridor>1.0</TensionCorridor>
                        <TensionProfile>1.0</TensionProfile>
                        <angle>180.0</angle>
                        <length>0.0</length>
                    </RadiusVector>
                </RadiusCollection>
                <hasProfileAzimut>false</hasProfileAzimut>
                <hasProfileTilt>false</hasProfileTilt>
                <profileAzimut>0.0</profileAzimut>
                <profileTilt>0.0</profileTilt>
            </Shape>
            <Type>START</Type>
            <Up>0.0</Up>
        </SRVD>
        <SRVD>
            <Azimut>12.500</Azimut>
            <ClosureToID>-1</ClosureToID>
            <Color>0x00ff0000</Color>
            <Date>2024-04-22</Date>
            <Depth>3.25</Depth>
            <DepthIn>2</DepthIn>
            <Down>0.5</Down>
            <Excluded>FALSE</Excluded>
            <Explorer>Ariane</Explorer>
            <FromID>0</FromID>
            <ID>1</ID>
            <Inclination>-4.75</Inclination>
            <Latitude>20.5</Latitude>
            <Left>1.2</Left>
            <Length>7.3</Length>
            <Locked>no</Locked>
            <Longitude>-87.25</Longitude>
            <Profiletype>VERTICAL</Profiletype>
            <Right>0.8</Right>
            <Section>Main tunnel</Section>
            <Shape>
                <RadiusCollection/>
                <hasProfileAzimut>true</hasProfileAzimut>
                <hasProfileTilt>false</hasProfileTilt>
                <profileAzimut>90</profileAzimut>
                <profileTilt>0.0</profileTilt>
            </Shape>
            <Type>REAL</Type>
            <Up>2.0</Up>
        </SRVD>
    </Data>
    <caveName>Mayan Blue</caveName>
    <unit>m</unit>
    <firstStartAbsoluteElevation>-2.5</firstStartAbsoluteElevation>
    <useMagneticAzimuth>true</useMagneticAzimuth>
    <Layers>
        <layerList>
            <constant>true</constant>
            <locked>false</locked>
            <name>Walls</name>
            <style>
                <dashScale>1.0</dashScale>
                <fillColorString>0x00ffffff</fillColorString>
                <lineType>SOLID</lineType>
                <lineTypeScale>1.0</lineTypeScale>
                <opacity>100.0</opacity>
                <sizeMode>SWITCHABLE</sizeMode>
                <strokeColorString>0xff000000</strokeColorString>
                <strokeThickness>0.5</strokeThickness>
            </style>
            <visible>true</visible>
        </layerList>
    </Layers>
    <CartoPage>
        <width>21.0</width>
        <height>29.7</height>
    </CartoPage>
</CaveFile>
"#;
